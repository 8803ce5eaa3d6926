use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

use crate::frontmatter::{MetaValue, split_front_matter};
use crate::models::{DocFile, DocTree};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
    #[error("Path escapes the docs directory: {0}")]
    OutsideRoot(PathBuf),
}

/// Read a document below `docs_root`.
///
/// The resolved path must stay inside the root once symlinks and `..` are
/// resolved.
pub fn read_doc(relative_path: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let root = docs_root
        .canonicalize()
        .map_err(|_| IoError::InvalidDocsDir(docs_root.display().to_string()))?;
    let absolute_path = relative_path.to_path(docs_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }

    let resolved = absolute_path.canonicalize()?;
    if !resolved.starts_with(&root) {
        warn!("refusing to read {} outside {}", resolved.display(), root.display());
        return Err(IoError::OutsideRoot(resolved));
    }
    if !resolved.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&resolved).map_err(IoError::Io)
}

/// Build the navigation tree of `docs_root`.
///
/// Entries whose name starts with `.` are skipped, as are files not ending
/// in `.md` and any path for which `exclude` returns true. Directories left
/// without documents are dropped.
pub fn scan_docs(
    docs_root: &Path,
    exclude: impl Fn(&RelativePath) -> bool,
) -> Result<DocTree, IoError> {
    validate_docs_dir(docs_root)?;

    let children = scan_directory_recursive(docs_root, RelativePath::new(""), &exclude)?;
    let name = docs_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tree = DocTree::Dir {
        name,
        path: RelativePathBuf::new(),
        children,
    };
    debug!(
        "scanned {}: {} documents",
        docs_root.display(),
        tree.files().len()
    );
    Ok(tree)
}

fn scan_directory_recursive(
    dir: &Path,
    rel: &RelativePath,
    exclude: &impl Fn(&RelativePath) -> bool,
) -> Result<Vec<DocTree>, IoError> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| (e.file_name(), e.path())))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    let mut out = vec![];
    for (file_name, path) in entries {
        let Some(name) = file_name.to_str() else {
            warn!("skipping non UTF-8 path {}", path.display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        let child_rel = rel.join(name);
        if exclude(&child_rel) {
            debug!("excluded {child_rel}");
            continue;
        }

        if path.is_dir() {
            let children = scan_directory_recursive(&path, &child_rel, exclude)?;
            if !children.is_empty() {
                out.push(DocTree::Dir {
                    name: name.to_string(),
                    path: child_rel,
                    children,
                });
            }
        } else if DocFile::is_markdown_name(name) {
            out.push(DocTree::File(DocFile::new(child_rel)));
        }
    }
    Ok(out)
}

pub fn validate_docs_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocsDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }
    Ok(())
}

/// One entry of the metadata index: the document URL plus its front matter fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub url: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, MetaValue>,
}

/// Collect the front matter of every document in `docs_root`.
///
/// Documents without front matter are left out. Unreadable documents are
/// logged and skipped. A `url` field in front matter is replaced by the
/// document URL.
pub fn build_metadata_index(
    docs_root: &Path,
    exclude: impl Fn(&RelativePath) -> bool,
) -> Result<Vec<MetadataRecord>, IoError> {
    let tree = scan_docs(docs_root, exclude)?;
    let mut records = vec![];

    for file in tree.files() {
        let content = match fs::read_to_string(file.relative_path().to_path(docs_root)) {
            Ok(content) => content,
            Err(err) => {
                warn!("skipping {}: {err}", file.relative_path());
                continue;
            }
        };
        let (Some(front_matter), _) = split_front_matter(&content) else {
            continue;
        };
        let mut fields = front_matter.fields;
        if fields.remove("url").is_some() {
            debug!("{}: front matter url replaced by document url", file.relative_path());
        }
        records.push(MetadataRecord {
            url: file.url(),
            fields,
        });
    }
    Ok(records)
}

impl MetadataRecord {
    /// `term` must already be lower-cased.
    fn matches(&self, term: &str) -> bool {
        let hit = |value: &str| value.to_lowercase().contains(term);
        let title = matches!(self.fields.get("title"), Some(MetaValue::Text(title)) if hit(title));
        let tagged = match self.fields.get("tags") {
            Some(MetaValue::List(tags)) => tags.iter().any(|tag| hit(tag)),
            Some(MetaValue::Text(tag)) => hit(tag),
            None => false,
        };
        title || hit(&self.url) || tagged
    }
}

/// Index records whose title, URL or any tag contains `term`, ignoring case.
///
/// An empty term matches every record. Order is preserved.
pub fn filter_index<'a>(records: &'a [MetadataRecord], term: &str) -> Vec<&'a MetadataRecord> {
    let term = term.trim().to_lowercase();
    records.iter().filter(|record| record.matches(&term)).collect()
}
