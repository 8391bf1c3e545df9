//! Documentation tree nodes.
//!
//! A [`Page`] is a single entry in a documentation tree: a name plus an
//! optional source path. Directories and files are variants of the same
//! value type, distinguished by [`PageKind`].

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Display tag attached to a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Upper-case tag name (e.g. `"CYAN"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Blue => "BLUE",
            Self::Magenta => "MAGENTA",
            Self::Cyan => "CYAN",
            Self::White => "WHITE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Plain page with no display tag.
    #[default]
    Page,
    /// Folder-like grouping.
    Directory,
    /// Single source document.
    File,
}

impl PageKind {
    /// Color shared by every directory node.
    pub const DIRECTORY_COLOR: Color = Color::Cyan;
    /// Color shared by every file node.
    pub const FILE_COLOR: Color = Color::Magenta;

    /// Display color for this kind, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Page => None,
            Self::Directory => Some(Self::DIRECTORY_COLOR),
            Self::File => Some(Self::FILE_COLOR),
        }
    }
}

/// Documentation tree node.
///
/// Construction is total: the name is taken as-is and the source, when
/// given, is stored verbatim without existence checks or normalization.
///
/// ```
/// use mdocs_tree::{Color, Page};
///
/// let dir = Page::directory("name").with_source("foo");
/// assert_eq!(dir.source(), Some("foo"));
/// assert_eq!(dir.color(), Some(Color::Cyan));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Page {
    name: String,
    source: Option<String>,
    kind: PageKind,
}

impl Page {
    /// Create a plain page.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, PageKind::Page)
    }

    /// Create a directory node.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::with_kind(name, PageKind::Directory)
    }

    /// Create a file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self::with_kind(name, PageKind::File)
    }

    /// Create a node of the given kind.
    pub fn with_kind(name: impl Into<String>, kind: PageKind) -> Self {
        Self {
            name: name.into(),
            source: None,
            kind,
        }
    }

    /// Set the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the source from a filesystem path.
    #[must_use]
    pub fn with_source_path(self, path: &Path) -> Self {
        self.with_source(path.to_string_lossy())
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path or identifier, if one was given.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Display color of this node's kind.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.kind.color()
    }

    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == PageKind::Directory
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == PageKind::File
    }
}
