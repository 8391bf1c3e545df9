//! Text and structured views of a page tree.

use serde::Serialize;

use crate::node::{Color, PageKind};
use crate::tree::{PageId, PageTree};

/// Nested, serializable view of a page and its subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    pub name: String,
    pub kind: PageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeItem>,
}

impl PageTree {
    /// Build nested items for every root.
    #[must_use]
    pub fn to_items(&self) -> Vec<TreeItem> {
        self.roots()
            .iter()
            .filter_map(|&id| self.item(id))
            .collect()
    }

    fn item(&self, id: PageId) -> Option<TreeItem> {
        let page = self.get(id)?;
        Some(TreeItem {
            name: page.name().to_owned(),
            kind: page.kind(),
            source: page.source().map(str::to_owned),
            color: page.color(),
            children: self
                .children(id)
                .iter()
                .filter_map(|&child| self.item(child))
                .collect(),
        })
    }
}

/// Line styling callback: receives the rendered node label and its color.
pub type Styler<'a> = &'a dyn Fn(&str, Option<Color>) -> String;

/// Options for [`render_text`].
#[derive(Default)]
pub struct RenderOptions<'a> {
    /// Append ` (source)` to nodes that have a source.
    pub show_source: bool,
    /// Paint node labels; plain text when `None`.
    pub styler: Option<Styler<'a>>,
}

/// Render the tree with box-drawing connectors, one node per line.
///
/// ```text
/// docs
/// ├── guide
/// │   └── setup.md
/// └── index.md
/// ```
#[must_use]
pub fn render_text(tree: &PageTree, options: &RenderOptions<'_>) -> String {
    let mut out = String::new();
    for &root in tree.roots() {
        render_node(tree, root, "", None, options, &mut out);
    }
    out
}

/// `is_last` is `None` for roots, which get no connector.
fn render_node(
    tree: &PageTree,
    id: PageId,
    prefix: &str,
    is_last: Option<bool>,
    options: &RenderOptions<'_>,
    out: &mut String,
) {
    let Some(page) = tree.get(id) else {
        return;
    };

    let mut label = page.name().to_owned();
    if options.show_source
        && let Some(source) = page.source()
    {
        label.push_str(" (");
        label.push_str(source);
        label.push(')');
    }
    let label = match options.styler {
        Some(style) => style(&label, page.color()),
        None => label,
    };

    let connector = match is_last {
        None => "",
        Some(true) => "└── ",
        Some(false) => "├── ",
    };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&label);
    out.push('\n');

    let child_prefix = match is_last {
        None => String::new(),
        Some(true) => format!("{prefix}    "),
        Some(false) => format!("{prefix}│   "),
    };
    let children = tree.children(id);
    for (i, &child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        render_node(tree, child, &child_prefix, Some(last), options, out);
    }
}
