use relative_path::RelativePathBuf;
use serde::Serialize;

use super::DocFile;

/// Navigation tree of a docs directory.
///
/// Children are sorted by name with directories and files interleaved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocTree {
    Dir {
        name: String,
        path: RelativePathBuf,
        children: Vec<DocTree>,
    },
    File(DocFile),
}

impl DocTree {
    pub fn name(&self) -> &str {
        match self {
            DocTree::Dir { name, .. } => name,
            DocTree::File(file) => file.display_name(),
        }
    }

    /// The first document in depth-first order, used as the default page.
    pub fn first_file(&self) -> Option<&DocFile> {
        match self {
            DocTree::File(file) => Some(file),
            DocTree::Dir { children, .. } => children.iter().find_map(DocTree::first_file),
        }
    }

    /// Every document in depth-first order.
    pub fn files(&self) -> Vec<&DocFile> {
        let mut out = vec![];
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a DocFile>) {
        match self {
            DocTree::File(file) => out.push(file),
            DocTree::Dir { children, .. } => {
                for child in children {
                    child.collect_files(out);
                }
            }
        }
    }

    /// Indented text listing, two spaces per level, directories suffixed with `/`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(0, &mut out);
        out
    }

    fn write_text(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self {
            DocTree::Dir { name, children, .. } => {
                out.push_str(&format!("{indent}{name}/\n"));
                for child in children {
                    child.write_text(depth + 1, out);
                }
            }
            DocTree::File(file) => {
                out.push_str(&format!("{indent}{}\n", file.display_name()));
            }
        }
    }
}
