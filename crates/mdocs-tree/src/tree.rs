//! Page tree with parent/child linkage.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<Page>` with parent/children relationships
//! tracked by indices. This provides:
//! - O(1) lookup by [`PageId`]
//! - O(1) lookup by local path via `path_index`
//! - O(d) ancestor walks where d is the page depth

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::TreeError;
use crate::node::{Page, PageKind};

/// Source of per-tree ids stamped into every [`PageId`].
static NEXT_TREE_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle to a page stored in a [`PageTree`].
///
/// Ids are only valid for the tree that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId {
    tree: usize,
    index: usize,
}

/// Documentation tree owning its pages.
#[derive(Debug)]
pub struct PageTree {
    id: usize,
    pages: Vec<Page>,
    children: Vec<Vec<PageId>>,
    parents: Vec<Option<PageId>>,
    roots: Vec<PageId>,
    path_index: HashMap<String, PageId>,
}

impl Default for PageTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTree {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            pages: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            roots: Vec::new(),
            path_index: HashMap::new(),
        }
    }

    /// Storage slot of `id`, if it was issued by this tree.
    fn slot(&self, id: PageId) -> Option<usize> {
        (id.tree == self.id && id.index < self.pages.len()).then_some(id.index)
    }

    /// Add a top-level page.
    pub fn add_root(&mut self, page: Page) -> PageId {
        let id = self.push(page, None);
        self.roots.push(id);
        id
    }

    /// Add a page under `parent`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::UnknownPage` if `parent` was issued by another
    /// tree or is out of range.
    pub fn add_child(&mut self, parent: PageId, page: Page) -> Result<PageId, TreeError> {
        let Some(slot) = self.slot(parent) else {
            return Err(TreeError::UnknownPage(parent.index));
        };
        let id = self.push(page, Some(parent));
        self.children[slot].push(id);
        Ok(id)
    }

    fn push(&mut self, page: Page, parent: Option<PageId>) -> PageId {
        let id = PageId {
            tree: self.id,
            index: self.pages.len(),
        };
        let local = match parent {
            Some(p) => format!("{}/{}", self.local_path(p), page.name()),
            None => page.name().to_owned(),
        };
        // First insertion wins when keys collide. Keys are not escaped, so a
        // name containing `/` can shadow a nested path with the same text.
        self.path_index.entry(local).or_insert(id);
        self.pages.push(page);
        self.children.push(Vec::new());
        self.parents.push(parent);
        id
    }

    #[must_use]
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.slot(id).map(|i| &self.pages[i])
    }

    #[must_use]
    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.slot(id).and_then(|i| self.parents[i])
    }

    /// Direct children in insertion order. Empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: PageId) -> &[PageId] {
        match self.slot(id) {
            Some(i) => &self.children[i],
            None => &[],
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[PageId] {
        &self.roots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors(&self, id: PageId) -> impl Iterator<Item = PageId> + '_ {
        std::iter::successors(self.parent(id), |&p| self.parent(p))
    }

    #[must_use]
    pub fn depth(&self, id: PageId) -> usize {
        self.ancestors(id).count()
    }

    /// Names from the root down to `id`, joined with `/`.
    ///
    /// Returns an empty string for unknown ids.
    #[must_use]
    pub fn local_path(&self, id: PageId) -> String {
        let Some(page) = self.get(id) else {
            return String::new();
        };
        let mut names: Vec<&str> = self
            .ancestors(id)
            .filter_map(|a| self.get(a).map(Page::name))
            .collect();
        names.reverse();
        names.push(page.name());
        names.join("/")
    }

    /// Output location of a page.
    ///
    /// Markdown files map to `.html`; every other node keeps its local path.
    ///
    /// - `docs/index.md` -> `docs/index.html`
    /// - `docs/logo.png` -> `docs/logo.png`
    /// - `docs/guide` (directory) -> `docs/guide`
    #[must_use]
    pub fn destination(&self, id: PageId) -> String {
        let local = self.local_path(id);
        match self.get(id).map(Page::kind) {
            Some(PageKind::File) => match local.strip_suffix(".md") {
                Some(stem) => format!("{stem}.html"),
                None => local,
            },
            _ => local,
        }
    }

    /// First page named `name` in pre-order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PageId> {
        self.walk()
            .map(|(id, _)| id)
            .find(|&id| self.pages[id.index].name() == name)
    }

    /// All pages matching `predicate`, in pre-order.
    pub fn find_all<F>(&self, mut predicate: F) -> Vec<PageId>
    where
        F: FnMut(&Page) -> bool,
    {
        self.walk()
            .map(|(id, _)| id)
            .filter(|&id| predicate(&self.pages[id.index]))
            .collect()
    }

    /// Page whose local path is `path`.
    ///
    /// When several pages share a local path (duplicate names, or a name
    /// containing `/`), the first inserted one is returned.
    #[must_use]
    pub fn find_by_local_path(&self, path: &str) -> Option<PageId> {
        self.path_index.get(path).copied()
    }

    /// Depth-first pre-order traversal yielding `(id, depth)`.
    pub fn walk(&self) -> Walk<'_> {
        let stack = self.roots.iter().rev().map(|&id| (id, 0)).collect();
        Walk { tree: self, stack }
    }
}

/// Pre-order iterator returned by [`PageTree::walk`].
pub struct Walk<'a> {
    tree: &'a PageTree,
    stack: Vec<(PageId, usize)>,
}

impl Iterator for Walk<'_> {
    type Item = (PageId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree
                .children(id)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((id, depth))
    }
}
