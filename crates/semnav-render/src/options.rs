//! Render options.
//!
//! Option levels count top-level menu items as level 0, which are level 1
//! in the tree (the navigation root is tree level 0). A `from_level` of 1
//! therefore skips the top-level items and starts with their children.

use std::ops::RangeInclusive;
use std::str::FromStr;

/// Inclusive range of option levels.
///
/// Deserializes from the same `A..B` text accepted by [`FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "String")
)]
pub struct LevelRange {
    /// First level to render.
    pub start: usize,
    /// Last level to render.
    pub end: usize,
}

impl From<RangeInclusive<usize>> for LevelRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self {
            start: *range.start(),
            end: *range.end(),
        }
    }
}

/// Error parsing a [`LevelRange`] from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseLevelRangeError {
    /// Not of the form `A..B` or `A..=B`.
    #[error("Invalid level range '{0}', expected A..B")]
    Format(String),
    /// Start greater than end.
    #[error("Invalid level range '{0}', start exceeds end")]
    Reversed(String),
}

impl FromStr for LevelRange {
    type Err = ParseLevelRangeError;

    /// Parse `A..B` or `A..=B`; both are inclusive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ParseLevelRangeError::Format(s.to_owned());
        let (start, end) = s.split_once("..").ok_or_else(format_err)?;
        let end = end.strip_prefix('=').unwrap_or(end);
        let start: usize = start.trim().parse().map_err(|_| format_err())?;
        let end: usize = end.trim().parse().map_err(|_| format_err())?;
        if start > end {
            return Err(ParseLevelRangeError::Reversed(s.to_owned()));
        }
        Ok(Self { start, end })
    }
}

impl TryFrom<String> for LevelRange {
    type Error = ParseLevelRangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Call-time rendering options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct RenderOptions {
    /// Skip option levels above this one.
    pub from_level: usize,
    /// Stop rendering below this option level.
    pub until_level: Option<usize>,
    /// Render exactly this option level.
    pub level: Option<usize>,
    /// Render this inclusive range of option levels.
    pub levels: Option<LevelRange>,
    /// Ids of items whose subtrees are left out.
    pub except_for: Vec<String>,
    /// Render the last breadcrumb item as a link.
    pub last_as_link: bool,
}

/// Effective level bounds after option resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelBounds {
    pub from_level: usize,
    pub until_level: Option<usize>,
}

impl RenderOptions {
    /// Resolve `level`, `levels` and `from_level`/`until_level` into bounds.
    ///
    /// `level` wins over `levels`, which wins over the explicit fields.
    #[must_use]
    pub fn bounds(&self) -> LevelBounds {
        let explicit = self.from_level != 0 || self.until_level.is_some();
        let forms = [self.level.is_some(), self.levels.is_some(), explicit];
        if forms.iter().filter(|set| **set).count() > 1 {
            tracing::warn!(
                level = ?self.level,
                levels = ?self.levels,
                from_level = self.from_level,
                until_level = ?self.until_level,
                "Conflicting level options, using the most specific"
            );
        }

        if let Some(level) = self.level {
            LevelBounds {
                from_level: level,
                until_level: Some(level),
            }
        } else if let Some(range) = self.levels {
            LevelBounds {
                from_level: range.start,
                until_level: Some(range.end),
            }
        } else {
            LevelBounds {
                from_level: self.from_level,
                until_level: self.until_level,
            }
        }
    }

    /// Shorthand for options rendering a single level.
    #[must_use]
    pub fn level(level: usize) -> Self {
        Self {
            level: Some(level),
            ..Self::default()
        }
    }

    /// Shorthand for options rendering an inclusive range of levels.
    #[must_use]
    pub fn levels(range: RangeInclusive<usize>) -> Self {
        Self {
            levels: Some(range.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = RenderOptions::default().bounds();
        assert_eq!(
            bounds,
            LevelBounds {
                from_level: 0,
                until_level: None
            }
        );
    }

    #[test]
    fn test_level_bounds() {
        let bounds = RenderOptions::level(2).bounds();
        assert_eq!(bounds.from_level, 2);
        assert_eq!(bounds.until_level, Some(2));
    }

    #[test]
    fn test_levels_bounds() {
        let bounds = RenderOptions::levels(0..=1).bounds();
        assert_eq!(bounds.from_level, 0);
        assert_eq!(bounds.until_level, Some(1));
    }

    #[test]
    fn test_explicit_bounds() {
        let options = RenderOptions {
            from_level: 1,
            until_level: Some(3),
            ..RenderOptions::default()
        };
        let bounds = options.bounds();
        assert_eq!(bounds.from_level, 1);
        assert_eq!(bounds.until_level, Some(3));
    }

    #[test]
    fn test_level_takes_precedence() {
        let options = RenderOptions {
            from_level: 3,
            level: Some(1),
            levels: Some((0..=4).into()),
            ..RenderOptions::default()
        };
        let bounds = options.bounds();
        assert_eq!(bounds.from_level, 1);
        assert_eq!(bounds.until_level, Some(1));
    }

    #[test]
    fn test_levels_over_explicit() {
        let options = RenderOptions {
            until_level: Some(5),
            levels: Some((1..=2).into()),
            ..RenderOptions::default()
        };
        assert_eq!(options.bounds().until_level, Some(2));
    }

    #[test]
    fn test_parse_level_range() {
        assert_eq!("0..1".parse(), Ok(LevelRange { start: 0, end: 1 }));
        assert_eq!("2..=4".parse(), Ok(LevelRange { start: 2, end: 4 }));
        assert_eq!(" 1 .. 1 ".parse(), Ok(LevelRange { start: 1, end: 1 }));
    }

    #[test]
    fn test_parse_level_range_errors() {
        assert_eq!(
            "1-2".parse::<LevelRange>(),
            Err(ParseLevelRangeError::Format("1-2".to_owned()))
        );
        assert_eq!(
            "a..2".parse::<LevelRange>(),
            Err(ParseLevelRangeError::Format("a..2".to_owned()))
        );
        assert_eq!(
            "3..1".parse::<LevelRange>(),
            Err(ParseLevelRangeError::Reversed("3..1".to_owned()))
        );
    }
}
