//! Tree discovery by filesystem walking.
//!
//! Scanning happens in two phases. The walk collects lightweight
//! `Entry` values (no file content is read), then the entries are
//! inserted into a [`PageTree`] so empty directories can be pruned before
//! they ever get an id.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::TreeError;
use crate::node::Page;
use crate::tree::{PageId, PageTree};

/// Discovered node with its subtree, prior to insertion.
#[derive(Debug)]
struct Entry {
    page: Page,
    children: Vec<Entry>,
}

/// Builds a [`PageTree`] from a content directory.
///
/// The root directory becomes the single root node. Each subdirectory
/// becomes a directory node and each file a file node, with `source` set
/// to the root joined with the entry's subpath.
pub struct Scanner {
    root: PathBuf,
    exclude: Vec<Pattern>,
    /// Directory patterns derived from `dir/**` excludes.
    exclude_dirs: Vec<Pattern>,
    extensions: Vec<String>,
    prune_empty: bool,
}

impl Scanner {
    /// Create a scanner for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
            exclude_dirs: Vec::new(),
            extensions: Vec::new(),
            prune_empty: false,
        }
    }

    /// Skip entries whose root-relative path matches any of `patterns`.
    ///
    /// Paths are matched with `/` separators. A pattern ending in `/**`
    /// (e.g. `"drafts/**"`) also excludes the directory itself.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Pattern` for an invalid glob.
    pub fn exclude<I, S>(mut self, patterns: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if let Some(dir) = pattern.strip_suffix("/**") {
                self.exclude_dirs.push(Pattern::new(dir)?);
            }
            self.exclude.push(Pattern::new(pattern)?);
        }
        Ok(self)
    }

    /// Only keep files with one of these extensions (without the dot).
    ///
    /// An empty list keeps every file.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Drop directories left without any files.
    #[must_use]
    pub fn prune_empty(mut self, prune: bool) -> Self {
        self.prune_empty = prune;
        self
    }

    /// Walk the root directory and build the tree.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::RootNotFound` or `TreeError::NotADirectory` if
    /// the root is unusable, and `TreeError::Io` if it cannot be read.
    pub fn scan(&self) -> Result<PageTree, TreeError> {
        if !self.root.exists() {
            return Err(TreeError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(TreeError::NotADirectory(self.root.clone()));
        }

        let name = self
            .root
            .file_name()
            .map_or_else(|| self.root.to_string_lossy(), |n| n.to_string_lossy())
            .into_owned();
        let children = self.scan_directory(read_entries(&self.root)?, "");

        let mut tree = PageTree::new();
        let root = tree.add_root(Page::directory(name).with_source_path(&self.root));
        for child in children {
            insert(&mut tree, root, child)?;
        }

        tracing::info!(
            root = %self.root.display(),
            pages = tree.len(),
            "Scanned content root"
        );
        Ok(tree)
    }

    fn scan_directory(&self, entries: Vec<DirItem>, rel_prefix: &str) -> Vec<Entry> {
        let mut result = Vec::new();
        for DirItem { path, is_dir, name } in entries {
            let rel_path = if rel_prefix.is_empty() {
                name.clone()
            } else {
                format!("{rel_prefix}/{name}")
            };

            if self.is_excluded(&rel_path, is_dir) {
                tracing::debug!(path = %rel_path, "Skipping excluded entry");
                continue;
            }

            if is_dir {
                let children = match read_entries(&path) {
                    Ok(items) => self.scan_directory(items, &rel_path),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to read directory");
                        Vec::new()
                    }
                };
                if self.prune_empty && children.is_empty() {
                    tracing::debug!(path = %rel_path, "Pruning empty directory");
                    continue;
                }
                result.push(Entry {
                    page: Page::directory(name).with_source_path(&path),
                    children,
                });
            } else if self.accepts_extension(&path) {
                result.push(Entry {
                    page: Page::file(name).with_source_path(&path),
                    children: Vec::new(),
                });
            }
        }
        result
    }

    fn is_excluded(&self, rel_path: &str, is_dir: bool) -> bool {
        self.exclude.iter().any(|p| p.matches(rel_path))
            || (is_dir && self.exclude_dirs.iter().any(|p| p.matches(rel_path)))
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|e| e.to_string_lossy())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}

/// Directory listing item with its file type cached.
struct DirItem {
    path: PathBuf,
    is_dir: bool,
    name: String,
}

/// List visible entries of `dir`, directories first, then files, each by name.
fn read_entries(dir: &Path) -> std::io::Result<Vec<DirItem>> {
    let mut items: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| DirItem {
            is_dir: e.file_type().is_ok_and(|t| t.is_dir()),
            name: e.file_name().to_string_lossy().into_owned(),
            path: e.path(),
        })
        .filter(|item| !item.name.starts_with('.'))
        .collect();
    items.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
    Ok(items)
}

fn insert(tree: &mut PageTree, parent: PageId, entry: Entry) -> Result<(), TreeError> {
    let id = tree.add_child(parent, entry.page)?;
    for child in entry.children {
        insert(tree, id, child)?;
    }
    Ok(())
}
