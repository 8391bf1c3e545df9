//! Tree error types.

use std::path::PathBuf;

/// Error building or editing a page tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Content root does not exist.
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// Content root exists but is not a directory.
    #[error("Content root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Page id does not belong to this tree.
    #[error("Unknown page id: {0}")]
    UnknownPage(usize),
    /// Invalid exclude pattern.
    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
