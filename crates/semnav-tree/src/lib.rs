//! Navigation tree model for semnav.
//!
//! This crate provides:
//! - [`Navigation`]: the root of one named navigation, owning its [`NavNode`] tree
//! - [`NavigationBuilder`]: registration of items and nested items
//! - [`Registry`]: named collection of navigations
//! - [`CurrentPage`]: "is this target the current page" detection used to mark
//!   the active path
//!
//! Trees are plain owned data. Every traversal in this crate uses an explicit
//! stack, so tree height never translates into call depth.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use semnav_tree::{CurrentPath, NavigationBuilder};
//!
//! let mut builder = NavigationBuilder::new("menu");
//! builder.branch("guide", "Guide", "/guide", |items| {
//!     items.item("setup", "Setup", "/guide/setup");
//! });
//! builder.item("faq", "FAQ", "/faq");
//! let mut nav = builder.build()?;
//!
//! nav.mark_active(&CurrentPath::new("/guide/setup"));
//!
//! let path: Vec<&str> = nav.active_path().iter().map(|n| n.item().id.as_str()).collect();
//! assert_eq!(path, ["guide", "setup"]);
//! # Ok(())
//! # }
//! ```

mod builder;
mod current;
mod navigation;
mod node;

pub use builder::{Items, NavigationBuilder, Registry, TreeError};
pub use current::{CurrentPage, CurrentPath};
pub use navigation::Navigation;
pub use node::{Iter, NavItem, NavNode};
