use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

/// A Markdown document inside the docs root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl DocFile {
    pub const EXTENSION: &'static str = ".md";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.md` extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Site URL of the document: `/` followed by its relative path.
    pub fn url(&self) -> String {
        format!("/{}", self.relative_path)
    }

    /// True for names ending in `.md`, in any case.
    pub fn is_markdown_name(name: &str) -> bool {
        Self::strip_extension(name).is_some()
    }

    fn strip_extension(name: &str) -> Option<&str> {
        let split = name.len().checked_sub(Self::EXTENSION.len())?;
        let (stem, ext) = (name.get(..split)?, name.get(split..)?);
        ext.eq_ignore_ascii_case(Self::EXTENSION).then_some(stem)
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| Self::strip_extension(name).unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<&str> for DocFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_strips_extension() {
        assert_eq!(DocFile::from("guide/intro.md").display_name(), "intro");
        assert_eq!(DocFile::from("README.MD").display_name(), "README");
    }

    #[test]
    fn url_is_rooted_relative_path() {
        assert_eq!(DocFile::from("guide/intro.md").url(), "/guide/intro.md");
    }

    #[test]
    fn markdown_name_check() {
        assert!(DocFile::is_markdown_name("a.md"));
        assert!(DocFile::is_markdown_name("a.Md"));
        assert!(!DocFile::is_markdown_name("a.markdown"));
        assert!(!DocFile::is_markdown_name("md"));
        assert!(!DocFile::is_markdown_name("é.txt"));
    }
}
