use std::path::PathBuf;

use mdocs_tree::{Color, Page, PageKind};

#[test]
fn page_keeps_name_and_source() {
    let one = Page::new("one").with_source("foo");
    assert_eq!(one.name(), "one");
    assert_eq!(one.source(), Some("foo"));
}

#[test]
fn directory_is_cyan() {
    let node = Page::directory("name").with_source("foo");
    assert_eq!(node.source(), Some("foo"));
    assert_eq!(node.color().map(Color::as_str), Some("CYAN"));
    assert_eq!(PageKind::DIRECTORY_COLOR, Color::Cyan);
}

#[test]
fn file_source_is_joined_path_verbatim() {
    let source: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "docs",
        "content",
        "utilities",
        "mdocs",
        "index.md",
    ]
    .iter()
    .collect();
    let node = Page::file("foo").with_source(source.to_string_lossy());
    assert_eq!(node.source(), Some(source.to_string_lossy().as_ref()));
}
