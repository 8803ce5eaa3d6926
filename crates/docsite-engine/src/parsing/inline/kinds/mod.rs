//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser refers
//! to these constants and never hardcodes a marker.
//!
//! - **`CodeSpan`**: `` ` `` raw zone that suppresses other parsing
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](url)`
//! - **`Emphasis`**: `**`/`__`, `*`/`_` and `~~` pairs

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
