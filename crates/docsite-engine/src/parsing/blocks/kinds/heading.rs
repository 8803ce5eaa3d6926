use crate::parsing::span::Span;

/// ATX heading syntax: 1-6 `#`, one space, then text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the trimmed text span of a heading line.
    ///
    /// `base` is the absolute offset of `text`. Lines whose text trims to
    /// nothing are not headings.
    pub fn parse(text: &str, base: usize) -> Option<(u8, Span)> {
        let hashes = text.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        let body = text[hashes..].strip_prefix(' ')?;
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lead = body.len() - body.trim_start().len();
        let start = base + hashes + 1 + lead;
        Some((hashes as u8, Span::new(start, start + trimmed.len())))
    }
}
