//! Navigation root.
//!
//! A [`Navigation`] is the level-0 root of one named tree. It owns the
//! top-level nodes and provides the whole-tree operations:
//! - [`Navigation::mark_active`]: flag the trail to the current page
//! - [`Navigation::active_path`]: read that trail back
//! - [`Navigation::without`]: prune subtrees by id

use std::slice::IterMut;

use crate::current::CurrentPage;
use crate::node::{Iter, NavItem, NavNode};

/// Root of one named navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Navigation {
    name: String,
    children: Vec<NavNode>,
}

/// Pending branch during [`Navigation::mark_active`].
struct Frame<'a> {
    item: Option<&'a mut NavItem>,
    children: IterMut<'a, NavNode>,
    has_active_child: bool,
}

impl Navigation {
    pub(crate) fn new(name: String, children: Vec<NavNode>) -> Self {
        Self { name, children }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        &self.children
    }

    /// The root is always level 0.
    #[must_use]
    pub fn level(&self) -> usize {
        0
    }

    /// True if the navigation has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// First active top-level node, if any.
    #[must_use]
    pub fn active_child(&self) -> Option<&NavNode> {
        self.children.iter().find(|child| child.is_active())
    }

    /// Depth-first iterator over all nodes in document order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.children)
    }

    /// Find a node by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&NavNode> {
        self.iter().find(|node| node.item().id == id)
    }

    /// Mark the trail to the current page.
    ///
    /// Clears every flag, then asks `current` about each target exactly once,
    /// depth-first in document order. A node is active when its own target is
    /// current or when any of its children is active.
    pub fn mark_active(&mut self, current: &dyn CurrentPage) {
        let mut stack = vec![Frame {
            item: None,
            children: self.children.iter_mut(),
            has_active_child: false,
        }];

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.children.next(),
                None => break,
            };

            match next {
                Some(NavNode::Leaf(item)) => {
                    item.active = current.is_current(&item.target);
                    if item.active
                        && let Some(frame) = stack.last_mut()
                    {
                        frame.has_active_child = true;
                    }
                }
                Some(NavNode::Branch { item, children }) => {
                    item.active = current.is_current(&item.target);
                    stack.push(Frame {
                        item: Some(item),
                        children: children.iter_mut(),
                        has_active_child: false,
                    });
                }
                None => {
                    let Some(done) = stack.pop() else { break };
                    if let Some(item) = done.item {
                        item.active |= done.has_active_child;
                        if item.active
                            && let Some(parent) = stack.last_mut()
                        {
                            parent.has_active_child = true;
                        }
                    }
                }
            }
        }
    }

    /// Root-to-node chain following the first active child at each level.
    ///
    /// Empty when no top-level node is active.
    #[must_use]
    pub fn active_path(&self) -> Vec<&NavNode> {
        let mut path = Vec::new();
        let mut current = self.active_child();
        while let Some(node) = current {
            path.push(node);
            current = node.active_child();
        }
        path
    }

    /// Copy of this navigation with the subtrees rooted at `ids` removed.
    ///
    /// Branches left without children become leaves. Ids that do not occur
    /// in the tree are ignored.
    #[must_use]
    pub fn without<S: AsRef<str>>(&self, ids: &[S]) -> Navigation {
        let mut pruned = self.clone();
        if ids.is_empty() {
            return pruned;
        }

        for id in ids {
            let id = id.as_ref();
            if self.find(id).is_none() {
                tracing::debug!(navigation = %self.name, id, "Excluded id not found");
            }
        }

        let excluded = |node: &NavNode| ids.iter().any(|id| id.as_ref() == node.item().id);
        pruned.children.retain(|node| !excluded(node));

        let mut stack = vec![pruned.children.iter_mut()];
        while let Some(level) = stack.last_mut() {
            let Some(node) = level.next() else {
                stack.pop();
                continue;
            };
            if let NavNode::Branch { children, .. } = &mut *node {
                children.retain(|child| !excluded(child));
            }
            node.collapse_if_empty();
            if let NavNode::Branch { children, .. } = node {
                stack.push(children.iter_mut());
            }
        }

        pruned
    }

    /// Set the active flag of a single node by id, without touching others.
    ///
    /// Returns `false` if no node has that id.
    pub fn set_active(&mut self, id: &str, active: bool) -> bool {
        let mut stack = vec![self.children.iter_mut()];
        while let Some(level) = stack.last_mut() {
            let Some(node) = level.next() else {
                stack.pop();
                continue;
            };
            if node.item().id == id {
                node.item_mut().active = active;
                return true;
            }
            if let NavNode::Branch { children, .. } = node {
                stack.push(children.iter_mut());
            }
        }
        false
    }
}
