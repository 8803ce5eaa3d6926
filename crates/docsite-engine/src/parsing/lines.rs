use super::span::Span;

/// A reference to a single source line.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line including its newline, if any.
    pub span: Span,
    /// Line text without the trailing `\n` or `\r\n`.
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Span of `text`, i.e. the line without its terminator.
    pub fn text_span(&self) -> Span {
        Span::new(self.span.start, self.span.start + self.text.len())
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `split_inclusive` so spans account for the newline bytes and stay
/// aligned with the source.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        LineRef {
            span: Span::new(start, offset),
            text: raw.trim_end_matches('\n').trim_end_matches('\r'),
        }
    })
}
