//! Menu rendering as nested lists.
//!
//! Renders every item at the starting level, expanding the children of
//! active items into nested lists. The starting level is found with the
//! same descent as the breadcrumb; `until_level` stops expansion.

use semnav_tree::{NavNode, Navigation};

use crate::breadcrumb::descend;
use crate::markup::Markup;
use crate::options::{LevelBounds, RenderOptions};

/// Renders a navigation as a menu of nested lists.
pub struct ListRenderer<'a, M: Markup + ?Sized> {
    markup: &'a M,
    bounds: LevelBounds,
}

impl<'a, M: Markup + ?Sized> ListRenderer<'a, M> {
    #[must_use]
    pub fn new(markup: &'a M, options: &RenderOptions) -> Self {
        Self {
            markup,
            bounds: options.bounds(),
        }
    }

    /// Render the menu for `navigation`.
    ///
    /// Always produces the outer list, empty when there is nothing to show.
    #[must_use]
    pub fn render_navigation(&self, navigation: &Navigation) -> String {
        let mut out = String::new();
        match descend(navigation, self.bounds.from_level) {
            Some(items) => self.render_items(items, &mut out),
            None => {
                self.markup.list_start(0, &mut out);
                self.markup.list_end(&mut out);
            }
        }
        out
    }

    /// Render `items` as a list, nesting the children of active items.
    pub fn render_items(&self, items: &[NavNode], out: &mut String) {
        self.markup.list_start(0, out);
        let mut stack = vec![items.iter()];
        while let Some(level) = stack.last_mut() {
            let Some(node) = level.next() else {
                stack.pop();
                self.markup.list_end(out);
                if !stack.is_empty() {
                    self.markup.item_end(out);
                }
                continue;
            };

            let item = node.item();
            self.markup.item_start(item.active, out);
            self.markup.link(&item.label, &item.target, out);
            if self.expands(node) {
                self.markup.list_start(stack.len(), out);
                stack.push(node.children().iter());
            } else {
                self.markup.item_end(out);
            }
        }
    }

    fn expands(&self, node: &NavNode) -> bool {
        node.is_active()
            && !node.is_leaf()
            && self
                .bounds
                .until_level
                .is_none_or(|until| node.level() <= until)
    }
}
