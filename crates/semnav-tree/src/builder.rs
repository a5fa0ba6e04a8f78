//! Navigation registration.
//!
//! [`NavigationBuilder`] collects items for one named navigation, nesting
//! children through closures, and validates ids on [`NavigationBuilder::build`].
//! [`Registry`] keeps built navigations by name.

use std::collections::{BTreeMap, HashSet};

use crate::current::CurrentPage;
use crate::navigation::Navigation;
use crate::node::{NavItem, NavNode};

/// Navigation construction and lookup error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// Two items in one navigation share an id.
    #[error("Duplicate item id '{id}' in navigation '{navigation}'")]
    DuplicateId {
        /// Navigation name.
        navigation: String,
        /// The repeated id.
        id: String,
    },
    /// An item was registered without an id.
    #[error("Item '{label}' in navigation '{navigation}' has an empty id")]
    EmptyId {
        /// Navigation name.
        navigation: String,
        /// Label of the offending item.
        label: String,
    },
    /// No navigation registered under this name.
    #[error("Navigation not found: {0}")]
    UnknownNavigation(String),
}

/// Ordered list of items at one level of a navigation under construction.
#[derive(Debug)]
pub struct Items {
    level: usize,
    nodes: Vec<NavNode>,
}

impl Items {
    fn new(level: usize) -> Self {
        Self {
            level,
            nodes: Vec::new(),
        }
    }

    /// Add an item without children.
    pub fn item(&mut self, id: &str, label: &str, target: &str) -> &mut Self {
        self.nodes
            .push(NavNode::Leaf(self.make_item(id, label, target)));
        self
    }

    /// Add an item whose children are registered by `children`.
    ///
    /// If the closure adds nothing, the item becomes a leaf.
    pub fn branch(
        &mut self,
        id: &str,
        label: &str,
        target: &str,
        children: impl FnOnce(&mut Items),
    ) -> &mut Self {
        let mut nested = Items::new(self.level + 1);
        children(&mut nested);
        let item = self.make_item(id, label, target);
        self.nodes.push(NavNode::new(item, nested.nodes));
        self
    }

    /// Add an already built node.
    ///
    /// Levels inside `node` are rewritten to fit this position.
    pub fn node(&mut self, mut node: NavNode) -> &mut Self {
        relevel(&mut node, self.level);
        self.nodes.push(node);
        self
    }

    fn make_item(&self, id: &str, label: &str, target: &str) -> NavItem {
        NavItem {
            id: id.to_owned(),
            label: label.to_owned(),
            target: target.to_owned(),
            active: false,
            level: self.level,
        }
    }
}

fn relevel(node: &mut NavNode, level: usize) {
    let mut stack = vec![(node, level)];
    while let Some((node, level)) = stack.pop() {
        node.item_mut().level = level;
        if let NavNode::Branch { children, .. } = node {
            stack.extend(children.iter_mut().map(|child| (child, level + 1)));
        }
    }
}

/// Builder for one named [`Navigation`].
///
/// ```
/// # fn main() -> Result<(), semnav_tree::TreeError> {
/// use semnav_tree::NavigationBuilder;
///
/// let mut builder = NavigationBuilder::new("menu");
/// builder.branch("url1", "url1", "url1", |items| {
///     items.item("suburl1", "suburl1", "suburl1");
/// });
/// let nav = builder.build()?;
/// assert_eq!(nav.find("suburl1").map(|n| n.level()), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NavigationBuilder {
    name: String,
    items: Items,
}

impl NavigationBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Items::new(1),
        }
    }

    /// Add a top-level item without children.
    pub fn item(&mut self, id: &str, label: &str, target: &str) -> &mut Self {
        self.items.item(id, label, target);
        self
    }

    /// Add a top-level item with children.
    pub fn branch(
        &mut self,
        id: &str,
        label: &str,
        target: &str,
        children: impl FnOnce(&mut Items),
    ) -> &mut Self {
        self.items.branch(id, label, target, children);
        self
    }

    /// Add an already built top-level node.
    pub fn node(&mut self, node: NavNode) -> &mut Self {
        self.items.node(node);
        self
    }

    /// Validate ids and produce the navigation.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyId`] or [`TreeError::DuplicateId`] when item
    /// ids are missing or repeated.
    pub fn build(self) -> Result<Navigation, TreeError> {
        let navigation = Navigation::new(self.name, self.items.nodes);

        let mut seen = HashSet::new();
        for node in navigation.iter() {
            let item = node.item();
            if item.id.is_empty() {
                return Err(TreeError::EmptyId {
                    navigation: navigation.name().to_owned(),
                    label: item.label.clone(),
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(TreeError::DuplicateId {
                    navigation: navigation.name().to_owned(),
                    id: item.id.clone(),
                });
            }
        }

        Ok(navigation)
    }
}

/// Named navigations available to the view layer.
#[derive(Debug, Default)]
pub struct Registry {
    navigations: BTreeMap<String, Navigation>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a navigation under its name, replacing any previous one.
    pub fn register(&mut self, navigation: Navigation) {
        let name = navigation.name().to_owned();
        if self.navigations.insert(name.clone(), navigation).is_some() {
            tracing::debug!(navigation = %name, "Replaced registered navigation");
        }
    }

    /// Look up a navigation by name.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNavigation`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Navigation, TreeError> {
        self.navigations
            .get(name)
            .ok_or_else(|| TreeError::UnknownNavigation(name.to_owned()))
    }

    /// Copy of a navigation with its active path marked for `current`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNavigation`] if nothing is registered under `name`.
    pub fn navigation_for(
        &self,
        name: &str,
        current: &dyn CurrentPage,
    ) -> Result<Navigation, TreeError> {
        let mut navigation = self.get(name)?.clone();
        navigation.mark_active(current);
        Ok(navigation)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.navigations.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.navigations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.navigations.is_empty()
    }
}
