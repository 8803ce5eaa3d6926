//! Safe Markdown to HTML conversion with outline extraction, plus the docs
//! directory helpers a documentation site builds on.

pub mod convert;
pub mod error;
pub mod escape;
pub mod frontmatter;
pub mod io;
pub mod models;
pub mod outline;
pub mod parsing;
pub mod render;
pub mod slug;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{Conversion, ConvertOptions, Converter, DEFAULT_MAX_INPUT_BYTES, convert};
pub use error::ConvertError;
pub use escape::escape_html;
pub use frontmatter::{FrontMatter, MetaValue, split_front_matter};
pub use io::*;
pub use models::{DocFile, DocTree};
pub use outline::{
    OutlineEntry, OutlineNode, OutlineTree, render_outline_html, render_outline_tree_html,
};
pub use slug::{HeadingIdPolicy, HeadingIds, slugify};
