//! Markup trait for format-specific element rendering.
//!
//! Renderers decide which elements to emit; a [`Markup`] implementation
//! decides how each element looks. This keeps the traversal independent of
//! the host's tag-building conventions.

/// Element-level output operations used by the renderers.
///
/// Every method appends to `out`. Containers are opened and closed by
/// separate calls so nested output never needs intermediate buffers.
pub trait Markup {
    /// Open a list container.
    ///
    /// `depth` is 0 for the outermost list and grows by one per nesting level.
    fn list_start(&self, depth: usize, out: &mut String);

    /// Close a list container.
    fn list_end(&self, out: &mut String);

    /// Open a list item.
    fn item_start(&self, active: bool, out: &mut String);

    /// Close a list item.
    fn item_end(&self, out: &mut String);

    /// Render a link to `target`.
    fn link(&self, label: &str, target: &str, out: &mut String);

    /// Render non-link text.
    fn text(&self, label: &str, out: &mut String);

    /// Render the separator placed after an ancestor link.
    ///
    /// Default renders nothing.
    fn divider(&self, _out: &mut String) {}
}
