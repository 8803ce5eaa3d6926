use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the source.
///
/// `full` covers the delimiters; the other spans cover the content the
/// renderer escapes and wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// `` `x` ``. A raw zone: no parsing inside.
    CodeSpan { full: Span, inner: Span },
    /// `![alt](url)`.
    Image { full: Span, alt: Span, url: Span },
    /// `[text](url)`.
    Link { full: Span, text: Span, url: Span },
    /// `**x**` or `__x__`.
    Strong { full: Span, inner: Span },
    /// `*x*` or `_x_`.
    Emphasis { full: Span, inner: Span },
    /// `~~x~~`.
    Strikethrough { full: Span, inner: Span },
}

impl InlineNode {
    /// Span of the whole construct, delimiters included.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Image { full, .. }
            | InlineNode::Link { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Strikethrough { full, .. } => *full,
        }
    }
}
