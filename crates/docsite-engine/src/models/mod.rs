pub mod doc_file;
pub mod doc_tree;

pub use doc_file::DocFile;
pub use doc_tree::DocTree;
