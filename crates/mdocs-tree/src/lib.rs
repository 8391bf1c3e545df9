//! Documentation tree model for mdocs.
//!
//! This crate provides:
//! - [`Page`]: a named node with an optional source path, in
//!   [`PageKind::Page`], [`PageKind::Directory`] or [`PageKind::File`] flavor
//! - [`PageTree`]: an arena of pages with parent/child linkage
//! - [`Scanner`]: builds a tree from a content directory
//! - [`render_text`] and [`TreeItem`]: text and serializable views
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mdocs_tree::{RenderOptions, Scanner, render_text};
//!
//! let tree = Scanner::new("docs").exclude(["drafts/**"])?.scan()?;
//! print!("{}", render_text(&tree, &RenderOptions::default()));
//! # Ok(())
//! # }
//! ```

mod error;
mod node;
mod render;
mod scanner;
mod tree;

pub use error::TreeError;
pub use node::{Color, Page, PageKind};
pub use render::{RenderOptions, Styler, TreeItem, render_text};
pub use scanner::Scanner;
pub use tree::{PageId, PageTree, Walk};
