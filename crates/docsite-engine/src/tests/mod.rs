use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Create an empty docs directory that is removed on drop
pub fn create_test_docs_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test markdown file with content
pub fn create_test_file(docs_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = docs_dir.path().join(relative);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Create a subdirectory
pub fn create_test_dir(docs_dir: &TempDir, relative: &str) -> PathBuf {
    let dir_path = docs_dir.path().join(relative);
    fs::create_dir_all(&dir_path).unwrap();
    dir_path
}
