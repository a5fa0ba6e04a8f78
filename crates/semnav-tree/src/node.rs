//! Navigation nodes.
//!
//! A node is either a [`NavNode::Leaf`] or a [`NavNode::Branch`] with a
//! non-empty, ordered list of children. Code that walks the tree matches on
//! the variant instead of probing for children at runtime.

/// Data carried by every navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavItem {
    /// Identifier, unique within one navigation.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Link target (URL or path).
    pub target: String,
    /// True if this entry is the current page or one of its ancestors.
    pub active: bool,
    /// Depth from the navigation root (root = 0, top-level items = 1).
    pub level: usize,
}

/// One entry in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum NavNode {
    /// Entry without children.
    Leaf(NavItem),
    /// Entry with at least one child.
    Branch {
        /// The entry itself.
        item: NavItem,
        /// Ordered children, never empty.
        children: Vec<NavNode>,
    },
}

impl NavNode {
    /// Build a node from an item and its children.
    ///
    /// An empty child list yields a [`NavNode::Leaf`].
    #[must_use]
    pub fn new(item: NavItem, children: Vec<NavNode>) -> Self {
        if children.is_empty() {
            Self::Leaf(item)
        } else {
            Self::Branch { item, children }
        }
    }

    /// The entry data.
    #[must_use]
    pub fn item(&self) -> &NavItem {
        match self {
            Self::Leaf(item) | Self::Branch { item, .. } => item,
        }
    }

    pub(crate) fn item_mut(&mut self) -> &mut NavItem {
        match self {
            Self::Leaf(item) | Self::Branch { item, .. } => item,
        }
    }

    /// Children in insertion order (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { children, .. } => children,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.item().active
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.item().level
    }

    /// First active child, if any.
    #[must_use]
    pub fn active_child(&self) -> Option<&NavNode> {
        self.children().iter().find(|child| child.is_active())
    }

    /// Turn a branch whose children were all removed into a leaf.
    pub(crate) fn collapse_if_empty(&mut self) {
        if let Self::Branch { item, children } = self
            && children.is_empty()
        {
            *self = Self::Leaf(std::mem::take(item));
        }
    }
}

/// Depth-first, document-order iterator over a list of nodes.
///
/// Created by [`Navigation::iter`](crate::Navigation::iter).
pub struct Iter<'a> {
    stack: Vec<std::slice::Iter<'a, NavNode>>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(nodes: &'a [NavNode]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(level) = self.stack.last_mut() {
            let Some(node) = level.next() else {
                self.stack.pop();
                continue;
            };
            if let NavNode::Branch { children, .. } = node {
                self.stack.push(children.iter());
            }
            return Some(node);
        }
        None
    }
}
