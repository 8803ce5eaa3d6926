//! # Inline Parsing
//!
//! Cursor-based inline parsing over one line of block content (heading text,
//! paragraph, list item or quote line; never fenced code).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: inline types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! At each position the constructs are tried in the order code span, image,
//! link, strong, emphasis, strikethrough. The first match wins and its content
//! is not scanned again, so `` `**x**` `` stays a code span. Matching is
//! non-greedy and never nests.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
