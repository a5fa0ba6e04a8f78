//! HTML markup for navigation rendering.
//!
//! Produces the Bootstrap navigation markup:
//!
//! ```html
//! <ul class="breadcrumb"><li><a href="url1">url1</a><span class="divider">/</span></li><li>suburl1</li></ul>
//! ```

use crate::markup::Markup;

/// HTML markup with configurable classes and divider.
///
/// All labels and attribute values are escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlMarkup {
    list_class: String,
    divider: String,
    active_class: String,
    base_url: Option<String>,
}

impl Default for HtmlMarkup {
    fn default() -> Self {
        Self::new("breadcrumb")
    }
}

impl HtmlMarkup {
    /// Create markup whose outermost list carries `list_class`.
    ///
    /// An empty class renders a bare `<ul>`.
    #[must_use]
    pub fn new(list_class: &str) -> Self {
        Self {
            list_class: list_class.to_owned(),
            divider: "/".to_owned(),
            active_class: "active".to_owned(),
            base_url: None,
        }
    }

    /// Set the divider text rendered after ancestor links.
    #[must_use]
    pub fn with_divider(mut self, divider: &str) -> Self {
        divider.clone_into(&mut self.divider);
        self
    }

    /// Set the class added to active list items.
    #[must_use]
    pub fn with_active_class(mut self, class: &str) -> Self {
        class.clone_into(&mut self.active_class);
        self
    }

    /// Prefix link targets that are not absolute URLs with `base_url`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = (!base_url.is_empty()).then(|| base_url.to_owned());
        self
    }

    fn href(&self, target: &str) -> String {
        match &self.base_url {
            Some(base) if !is_external(target) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    target.trim_start_matches('/')
                )
            }
            _ => target.to_owned(),
        }
    }
}

impl Markup for HtmlMarkup {
    fn list_start(&self, depth: usize, out: &mut String) {
        if depth == 0 && !self.list_class.is_empty() {
            out.push_str(r#"<ul class=""#);
            out.push_str(&escape_html(&self.list_class));
            out.push_str(r#"">"#);
        } else {
            out.push_str("<ul>");
        }
    }

    fn list_end(&self, out: &mut String) {
        out.push_str("</ul>");
    }

    fn item_start(&self, active: bool, out: &mut String) {
        if active && !self.active_class.is_empty() {
            out.push_str(r#"<li class=""#);
            out.push_str(&escape_html(&self.active_class));
            out.push_str(r#"">"#);
        } else {
            out.push_str("<li>");
        }
    }

    fn item_end(&self, out: &mut String) {
        out.push_str("</li>");
    }

    fn link(&self, label: &str, target: &str, out: &mut String) {
        out.push_str(r#"<a href=""#);
        out.push_str(&escape_html(&self.href(target)));
        out.push_str(r#"">"#);
        out.push_str(&escape_html(label));
        out.push_str("</a>");
    }

    fn text(&self, label: &str, out: &mut String) {
        out.push_str(&escape_html(label));
    }

    fn divider(&self, out: &mut String) {
        out.push_str(r#"<span class="divider">"#);
        out.push_str(&escape_html(&self.divider));
        out.push_str("</span>");
    }
}

/// Targets that already carry a scheme or are fragment-only.
fn is_external(target: &str) -> bool {
    target.contains("://")
        || target.starts_with("//")
        || target.starts_with("mailto:")
        || target.starts_with("tel:")
        || target.starts_with('#')
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
