use std::fs;

use docsite_engine::{
    DocTree, IoError, build_metadata_index, convert, read_doc, scan_docs, split_front_matter,
};
use relative_path::RelativePath;

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("guide")).unwrap();
    fs::write(root.join("index.md"), "---\ntitle: Home\n---\n# Home\n").unwrap();
    fs::write(root.join("guide/setup.md"), "# Setup\n## Install\n").unwrap();
    fs::write(root.join("guide/notes.txt"), "not markdown").unwrap();
    dir
}

#[test]
fn default_page_renders_from_scanned_tree() {
    let dir = site();
    let tree = scan_docs(dir.path(), |_: &RelativePath| false).unwrap();

    let first = tree.first_file().unwrap();
    assert_eq!(first.relative_path(), RelativePath::new("guide/setup.md"));

    let md = read_doc(first.relative_path(), dir.path()).unwrap();
    let (front_matter, body) = split_front_matter(&md);
    assert!(front_matter.is_none());
    let conv = convert(body).unwrap();
    assert_eq!(conv.outline.len(), 2);
}

#[test]
fn tree_serializes_with_type_tags() {
    let dir = site();
    let tree = scan_docs(dir.path(), |_: &RelativePath| false).unwrap();
    let DocTree::Dir { children, .. } = &tree else {
        panic!("root must be a directory");
    };
    let json = serde_json::to_value(children).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "dir", "name": "guide", "path": "guide", "children": [
                {"type": "file", "relative_path": "guide/setup.md", "display_name": "setup"}
            ]},
            {"type": "file", "relative_path": "index.md", "display_name": "index"}
        ])
    );
}

#[test]
fn index_lists_front_matter_only() {
    let dir = site();
    let index = build_metadata_index(dir.path(), |_: &RelativePath| false).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].url, "/index.md");
}

#[test]
fn traversal_is_refused() {
    let dir = site();
    let guide = dir.path().join("guide");
    let err = read_doc(RelativePath::new("../index.md"), &guide).unwrap_err();
    assert!(matches!(err, IoError::OutsideRoot(_)));
}
