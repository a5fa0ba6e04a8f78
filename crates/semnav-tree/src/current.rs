//! Current page detection.

/// Decides whether a navigation target is the page being rendered.
///
/// Supplied by the caller at render time. Closures taking `&str` implement
/// this trait, so request-specific matching can be passed inline:
///
/// ```
/// use semnav_tree::CurrentPage;
///
/// let current = |target: &str| target.starts_with("/docs");
/// assert!(current.is_current("/docs/setup"));
/// ```
pub trait CurrentPage {
    /// Returns `true` if `target` refers to the current page.
    fn is_current(&self, target: &str) -> bool;
}

impl<F> CurrentPage for F
where
    F: Fn(&str) -> bool,
{
    fn is_current(&self, target: &str) -> bool {
        self(target)
    }
}

/// Matches targets against a single request path.
///
/// Comparison ignores the query string, the fragment and a trailing slash,
/// so `/guide/`, `/guide?tab=1` and `/guide#intro` all match `/guide`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentPath {
    path: String,
}

impl CurrentPath {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize(path).to_owned(),
        }
    }

    /// The normalized request path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl CurrentPage for CurrentPath {
    fn is_current(&self, target: &str) -> bool {
        normalize(target) == self.path
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
