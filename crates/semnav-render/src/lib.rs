//! Breadcrumb and menu rendering for semnav navigation trees.
//!
//! This crate provides renderers that turn a marked [`Navigation`] into an
//! HTML fragment through the [`Markup`] trait:
//! - [`BreadcrumbRenderer`]: the active path, ancestors as links
//! - [`ListRenderer`]: a menu of nested lists, expanded along the active path
//!
//! [`HtmlMarkup`] produces Bootstrap-style HTML; hosts with their own tag
//! conventions implement [`Markup`] instead.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use semnav_render::{HtmlMarkup, RenderOptions, Style, render};
//! use semnav_tree::{CurrentPath, NavigationBuilder};
//!
//! let mut builder = NavigationBuilder::new("menu");
//! builder.branch("url1", "url1", "url1", |items| {
//!     items.item("suburl1", "suburl1", "suburl1");
//! });
//! let mut nav = builder.build()?;
//! nav.mark_active(&CurrentPath::new("suburl1"));
//!
//! let html = render(&nav, Style::Breadcrumb, &HtmlMarkup::default(), &RenderOptions::default());
//! assert_eq!(
//!     html,
//!     r#"<ul class="breadcrumb"><li><a href="url1">url1</a><span class="divider">/</span></li><li>suburl1</li></ul>"#
//! );
//! # Ok(())
//! # }
//! ```

mod breadcrumb;
mod html;
mod list;
mod markup;
mod options;

use std::str::FromStr;

use semnav_tree::Navigation;

pub use breadcrumb::BreadcrumbRenderer;
pub use html::{HtmlMarkup, escape_html};
pub use list::ListRenderer;
pub use markup::Markup;
pub use options::{LevelBounds, LevelRange, ParseLevelRangeError, RenderOptions};

/// Rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Style {
    /// Active path only.
    #[default]
    Breadcrumb,
    /// Nested menu lists.
    List,
}

/// Unknown style name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown navigation style '{0}', expected 'breadcrumb' or 'list'")]
pub struct ParseStyleError(String);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadcrumb" => Ok(Self::Breadcrumb),
            "list" => Ok(Self::List),
            _ => Err(ParseStyleError(s.to_owned())),
        }
    }
}

/// Render `navigation` in `style`.
///
/// Items listed in `options.except_for` are pruned before traversal.
#[must_use]
pub fn render(
    navigation: &Navigation,
    style: Style,
    markup: &dyn Markup,
    options: &RenderOptions,
) -> String {
    let pruned;
    let navigation = if options.except_for.is_empty() {
        navigation
    } else {
        pruned = navigation.without(&options.except_for);
        &pruned
    };

    tracing::debug!(
        navigation = navigation.name(),
        ?style,
        excluded = options.except_for.len(),
        "Rendering navigation"
    );

    match style {
        Style::Breadcrumb => BreadcrumbRenderer::new(markup, options).render_navigation(navigation),
        Style::List => ListRenderer::new(markup, options).render_navigation(navigation),
    }
}
