/// Blockquote block type with owned delimiter constant.
///
/// Only a single level is recognized; a second `>` is quote content.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the byte offset where quote content begins, or `None` when
    /// the line does not start with the prefix.
    ///
    /// One space after the prefix belongs to the prefix.
    pub fn strip_prefix(s: &str) -> Option<usize> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        let skip = usize::from(rest.starts_with(' '));
        Some(Self::PREFIX.len_utf8() + skip)
    }
}
