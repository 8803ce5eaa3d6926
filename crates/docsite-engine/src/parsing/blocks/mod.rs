//! # Block Parsing
//!
//! Two-phase block parsing over a single forward scan.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank, fence marker, heading, rule, quote prefix, list marker)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` state machine with states
//!    `Default`, `InFence`, `InBlockquote`, `InUnorderedList` and `InOrderedList`
//!    groups lines and emits `BlockNode`s as constructs open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListMarker, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Nesting is not supported: a second `>` or an indented marker is plain content
//! - All block nodes store byte spans into the source

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use kinds::{FenceKind, ListKind};
pub use types::{BlockKind, BlockNode};
