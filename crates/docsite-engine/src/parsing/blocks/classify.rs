use crate::parsing::{lines::LineRef, span::Span};

use super::kinds::{
    BlockQuote, CodeFence, FenceLine, Heading, ListKind, ListMarker, ThematicBreak,
};

/// What a single line looks like on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Fence(FenceLine),
    Heading { level: u8, text: Span },
    ThematicBreak,
    Quote { content: Span },
    ListItem { kind: ListKind, content: Span },
    Text { content: Span },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a fence line opens or
/// closes a block, or whether a list item continues a list, is decided by
/// the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the source, newline included.
    pub line: Span,
    /// Byte span of the line without its terminator; fenced code keeps it verbatim.
    pub raw: Span,
    pub kind: LineKind,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence when several forms match: fence, heading, thematic break,
    /// quote, list item, text. `- - -` is therefore a rule, not an item.
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let text = lr.text;
        let base = lr.span.start;

        let kind = if text.trim().is_empty() {
            LineKind::Blank
        } else if let Some(fence) = CodeFence::line(text, base) {
            LineKind::Fence(fence)
        } else if let Some((level, span)) = Heading::parse(text, base) {
            LineKind::Heading { level, text: span }
        } else if ThematicBreak::matches(text) {
            LineKind::ThematicBreak
        } else if let Some(idx) = BlockQuote::strip_prefix(text) {
            LineKind::Quote {
                content: trimmed_span(text, base, idx),
            }
        } else if let Some((kind, idx)) = ListMarker::parse(text) {
            LineKind::ListItem {
                kind,
                content: trimmed_span(text, base, idx),
            }
        } else {
            LineKind::Text {
                content: trimmed_span(text, base, 0),
            }
        };

        LineClass {
            line: lr.span,
            raw: lr.text_span(),
            kind,
        }
    }
}

/// Span of `text[from..]` with surrounding whitespace removed.
fn trimmed_span(text: &str, base: usize, from: usize) -> Span {
    let rest = &text[from..];
    let start = from + (rest.len() - rest.trim_start().len());
    let end = from + rest.trim_end().len();
    Span::new(base + start, base + end.max(start))
}
