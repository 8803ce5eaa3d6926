use crate::parsing::span::Span;

use super::kinds::{FenceKind, ListKind};

/// The kind of a block together with the spans it needs for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A single text line that no other block claimed.
    Paragraph,
    /// An ATX heading; its text is the block's `content_span`.
    Heading { level: u8 },
    /// A horizontal rule.
    ThematicBreak,
    /// A fenced code block (``` or ~~~). A raw zone: no other parsing inside.
    FencedCode {
        kind: FenceKind,
        /// Language token of the opening fence (may be empty).
        lang: Span,
        /// Verbatim content lines, without terminators.
        lines: Vec<Span>,
        /// False when input ended before the closing fence.
        closed: bool,
    },
    /// Contiguous `>` lines with their prefixes removed.
    BlockQuote { lines: Vec<Span> },
    /// Contiguous items of one list kind.
    List { kind: ListKind, items: Vec<Span> },
}

/// A parsed block node with its kind and spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters and newlines.
    pub span: Span,
    /// Content region inside `span` (heading/paragraph text, inner lines).
    pub content_span: Span,
}
