//! Breadcrumb rendering.
//!
//! Renders only the active path: every ancestor as a link followed by a
//! divider, the deepest rendered node as plain text (or a link with
//! `last_as_link`).
//!
//! # Level bounds
//!
//! - `from_level`: the descent skips nodes until it reaches one whose tree
//!   level is at least `from_level`, then renders from that node's active
//!   child.
//! - `until_level`: a node may end the trail only if its tree level is at
//!   most `until_level + 1`. Deeper nodes are dropped and the trail ends at
//!   the nearest ancestor that qualifies.
//!
//! Missing active children are not an error: the trail simply ends there.

use semnav_tree::{NavNode, Navigation};

use crate::markup::Markup;
use crate::options::{LevelBounds, RenderOptions};

/// Renders the active path of a navigation as a breadcrumb list.
pub struct BreadcrumbRenderer<'a, M: Markup + ?Sized> {
    markup: &'a M,
    bounds: LevelBounds,
    last_as_link: bool,
}

impl<'a, M: Markup + ?Sized> BreadcrumbRenderer<'a, M> {
    #[must_use]
    pub fn new(markup: &'a M, options: &RenderOptions) -> Self {
        Self {
            markup,
            bounds: options.bounds(),
            last_as_link: options.last_as_link,
        }
    }

    /// Render the breadcrumb for `navigation`.
    ///
    /// Always produces the outer list, empty when there is nothing to show.
    /// Does not apply `except_for`; see [`render`](crate::render).
    #[must_use]
    pub fn render_navigation(&self, navigation: &Navigation) -> String {
        let mut out = String::new();
        self.markup.list_start(0, &mut out);
        if let Some(start) = start_node(navigation, self.bounds.from_level) {
            self.render_node(start, &mut out);
        }
        self.markup.list_end(&mut out);
        out
    }

    /// Render the trail starting at `node` and following active children.
    ///
    /// Returns `false` if nothing was written.
    pub fn render_node(&self, node: &NavNode, out: &mut String) -> bool {
        let mut trail = vec![node];
        while let Some(child) = trail.last().and_then(|n| n.active_child()) {
            trail.push(child);
        }

        // The deepest node allowed to end the trail; everything above it
        // becomes an ancestor link.
        let Some(last) = trail.iter().rposition(|n| self.is_visible(n)) else {
            return false;
        };

        for ancestor in &trail[..last] {
            let item = ancestor.item();
            self.markup.item_start(false, out);
            self.markup.link(&item.label, &item.target, out);
            self.markup.divider(out);
            self.markup.item_end(out);
        }
        self.render_leaf(trail[last], out)
    }

    /// Render `node` as the end of the trail.
    ///
    /// Returns `false` without writing if the node is below `until_level`.
    pub fn render_leaf(&self, node: &NavNode, out: &mut String) -> bool {
        if !self.is_visible(node) {
            return false;
        }

        let item = node.item();
        self.markup.item_start(false, out);
        if self.last_as_link {
            self.markup.link(&item.label, &item.target, out);
        } else {
            self.markup.text(&item.label, out);
        }
        self.markup.item_end(out);
        true
    }

    fn is_visible(&self, node: &NavNode) -> bool {
        self.bounds
            .until_level
            .is_none_or(|until| node.level().saturating_sub(1) <= until)
    }
}

/// Descend to `from_level` and return the first node to render.
///
/// Follows active children while the current node has children and its
/// level is below `from_level`. Returns the active child of the node where
/// the descent stops, or `None` if the descent hits a leaf or a node
/// without an active child.
pub(crate) fn start_node(navigation: &Navigation, from_level: usize) -> Option<&NavNode> {
    descend(navigation, from_level)?
        .iter()
        .find(|child| child.is_active())
}

/// Descend to `from_level`, returning the children of the stop node.
///
/// `None` when the descent runs off the active path or stops at a leaf.
pub(crate) fn descend(navigation: &Navigation, from_level: usize) -> Option<&[NavNode]> {
    let mut level = navigation.level();
    let mut children = navigation.children();
    loop {
        if children.is_empty() {
            return None;
        }
        if from_level <= level {
            return Some(children);
        }
        let next = children.iter().find(|child| child.is_active())?;
        level = next.level();
        children = next.children();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use semnav_tree::{CurrentPath, NavigationBuilder};

    use super::*;
    use crate::html::HtmlMarkup;

    fn two_level(current: &str) -> Navigation {
        let mut builder = NavigationBuilder::new("menu");
        builder.branch("url1", "url1", "url1", |items| {
            items.item("suburl1", "suburl1", "suburl1");
        });
        builder.branch("url2", "url2", "url2", |items| {
            items.item("suburl2", "suburl2", "suburl2");
        });
        let mut nav = builder.build().unwrap();
        nav.mark_active(&CurrentPath::new(current));
        nav
    }

    fn three_level(current: &str) -> Navigation {
        let mut builder = NavigationBuilder::new("menu");
        builder.branch("url1", "url1", "url1", |items| {
            items.branch("suburl1", "suburl1", "suburl1", |items| {
                items.item("subsub1", "subsub1", "subsub1");
            });
        });
        builder.branch("url2", "url2", "url2", |items| {
            items.branch("suburl2", "suburl2", "suburl2", |items| {
                items.item("subsub2", "subsub2", "subsub2");
            });
        });
        let mut nav = builder.build().unwrap();
        nav.mark_active(&CurrentPath::new(current));
        nav
    }

    fn render(nav: &Navigation, options: &RenderOptions) -> String {
        BreadcrumbRenderer::new(&HtmlMarkup::default(), options).render_navigation(nav)
    }

    #[test]
    fn test_empty_navigation_renders_empty_list() {
        let nav = NavigationBuilder::new("menu").build().unwrap();

        assert_eq!(
            render(&nav, &RenderOptions::default()),
            r#"<ul class="breadcrumb"></ul>"#
        );
    }

    #[test]
    fn test_one_level_renders_active_leaf_as_text() {
        let mut builder = NavigationBuilder::new("menu");
        builder.item("url1", "url1", "url1");
        builder.item("url2", "url2", "url2");
        let mut nav = builder.build().unwrap();
        nav.mark_active(&CurrentPath::new("url2"));

        assert_eq!(
            render(&nav, &RenderOptions::default()),
            r#"<ul class="breadcrumb"><li>url2</li></ul>"#
        );
    }

    #[test]
    fn test_multilevel_renders_ancestor_links() {
        let nav = two_level("suburl1");

        assert_eq!(
            render(&nav, &RenderOptions::default()),
            concat!(
                r#"<ul class="breadcrumb">"#,
                r#"<li><a href="url1">url1</a><span class="divider">/</span></li>"#,
                "<li>suburl1</li>",
                "</ul>"
            )
        );
    }

    #[test]
    fn test_last_as_link() {
        let nav = two_level("suburl1");
        let options = RenderOptions {
            last_as_link: true,
            ..RenderOptions::default()
        };

        assert_eq!(
            render(&nav, &options),
            concat!(
                r#"<ul class="breadcrumb">"#,
                r#"<li><a href="url1">url1</a><span class="divider">/</span></li>"#,
                r#"<li><a href="suburl1">suburl1</a></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_only_root_level() {
        let nav = two_level("suburl1");

        assert_eq!(
            render(&nav, &RenderOptions::level(0)),
            r#"<ul class="breadcrumb"><li>url1</li></ul>"#
        );
    }

    #[test]
    fn test_second_level() {
        let nav = two_level("suburl1");

        assert_eq!(
            render(&nav, &RenderOptions::level(1)),
            r#"<ul class="breadcrumb"><li>suburl1</li></ul>"#
        );
    }

    #[test]
    fn test_exact_levels() {
        let nav = three_level("subsub1");

        assert_eq!(
            render(&nav, &RenderOptions::levels(0..=1)),
            concat!(
                r#"<ul class="breadcrumb">"#,
                r#"<li><a href="url1">url1</a><span class="divider">/</span></li>"#,
                "<li>suburl1</li>",
                "</ul>"
            )
        );
    }

    #[test]
    fn test_levels_skipping_top() {
        let nav = three_level("subsub2");

        assert_eq!(
            render(&nav, &RenderOptions::levels(1..=2)),
            concat!(
                r#"<ul class="breadcrumb">"#,
                r#"<li><a href="suburl2">suburl2</a><span class="divider">/</span></li>"#,
                "<li>subsub2</li>",
                "</ul>"
            )
        );
    }

    #[test]
    fn test_active_branch_without_active_child_ends_trail() {
        let nav = two_level("url2");

        assert_eq!(
            render(&nav, &RenderOptions::default()),
            r#"<ul class="breadcrumb"><li>url2</li></ul>"#
        );
    }

    #[test]
    fn test_nothing_active_renders_empty_list() {
        let nav = two_level("elsewhere");

        assert_eq!(
            render(&nav, &RenderOptions::default()),
            r#"<ul class="breadcrumb"></ul>"#
        );
    }

    #[test]
    fn test_from_level_beyond_depth_renders_empty_list() {
        let nav = two_level("suburl1");
        let options = RenderOptions {
            from_level: 10,
            ..RenderOptions::default()
        };

        assert_eq!(render(&nav, &options), r#"<ul class="breadcrumb"></ul>"#);
    }

    #[test]
    fn test_from_level_without_active_child_renders_empty_list() {
        let nav = two_level("url2");
        let options = RenderOptions {
            from_level: 1,
            ..RenderOptions::default()
        };

        assert_eq!(render(&nav, &options), r#"<ul class="breadcrumb"></ul>"#);
    }

    #[test]
    fn test_until_level_large_renders_full_trail() {
        let nav = three_level("subsub1");
        let options = RenderOptions {
            until_level: Some(100),
            ..RenderOptions::default()
        };

        let out = render(&nav, &options);

        assert!(out.ends_with("<li>subsub1</li></ul>"), "{out}");
    }

    #[test]
    fn test_until_level_max_renders_full_trail() {
        let nav = two_level("suburl1");
        let options = RenderOptions {
            until_level: Some(usize::MAX),
            ..RenderOptions::default()
        };

        assert_eq!(
            render(&nav, &options),
            concat!(
                r#"<ul class="breadcrumb">"#,
                r#"<li><a href="url1">url1</a><span class="divider">/</span></li>"#,
                "<li>suburl1</li>",
                "</ul>"
            )
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let nav = three_level("subsub1");
        let options = RenderOptions::levels(0..=1);

        assert_eq!(render(&nav, &options), render(&nav, &options));
    }

    #[test]
    fn test_render_leaf_hidden_below_until_level() {
        let nav = three_level("subsub1");
        let markup = HtmlMarkup::default();
        let renderer = BreadcrumbRenderer::new(&markup, &RenderOptions::level(0));
        let mut out = String::new();

        let written = renderer.render_leaf(nav.find("suburl1").unwrap(), &mut out);

        assert!(!written);
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_node_from_inner_node() {
        let nav = three_level("subsub1");
        let markup = HtmlMarkup::default();
        let renderer = BreadcrumbRenderer::new(&markup, &RenderOptions::default());
        let mut out = String::new();

        let written = renderer.render_node(nav.find("suburl1").unwrap(), &mut out);

        assert!(written);
        assert_eq!(
            out,
            r#"<li><a href="suburl1">suburl1</a><span class="divider">/</span></li><li>subsub1</li>"#
        );
    }

    #[test]
    fn test_deep_tree_terminates() {
        const DEPTH: usize = 2_000;

        let mut node = NavNode::Leaf(semnav_tree::NavItem {
            id: format!("n{DEPTH}"),
            label: format!("n{DEPTH}"),
            target: format!("/n{DEPTH}"),
            active: true,
            level: DEPTH,
        });
        for level in (1..DEPTH).rev() {
            node = NavNode::new(
                semnav_tree::NavItem {
                    id: format!("n{level}"),
                    label: format!("n{level}"),
                    target: format!("/n{level}"),
                    active: true,
                    level,
                },
                vec![node],
            );
        }
        let mut builder = NavigationBuilder::new("deep");
        builder.node(node);
        let nav = builder.build().unwrap();

        let out = render(&nav, &RenderOptions::default());

        assert!(out.ends_with(&format!("<li>n{DEPTH}</li></ul>")));
        assert_eq!(out.matches("<li>").count(), DEPTH);

        let options = RenderOptions {
            from_level: DEPTH - 2,
            ..RenderOptions::default()
        };
        assert_eq!(
            render(&nav, &options),
            format!(
                r#"<ul class="breadcrumb"><li><a href="/n{}">n{}</a><span class="divider">/</span></li><li>n{DEPTH}</li></ul>"#,
                DEPTH - 1,
                DEPTH - 1
            )
        );
    }
}
