#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// List item markers: `-`, `*`, `+` or `digits.`, then whitespace.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_SUFFIX: u8 = b'.';

    /// Returns the list kind and the byte offset of the item text.
    ///
    /// Leading indentation is allowed and ignored; items must carry text.
    pub fn parse(text: &str) -> Option<(ListKind, usize)> {
        let rest = text.trim_start_matches([' ', '\t']);
        let indent = text.len() - rest.len();
        let bytes = rest.as_bytes();

        let (kind, marker_len) = if bytes.first().is_some_and(|b| Self::BULLETS.contains(b)) {
            (ListKind::Unordered, 1)
        } else {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 || bytes.get(digits) != Some(&Self::ORDERED_SUFFIX) {
                return None;
            }
            (ListKind::Ordered, digits + 1)
        };

        let after = &rest[marker_len..];
        let item = after.trim_start_matches([' ', '\t']);
        let gap = after.len() - item.len();
        if gap == 0 || item.trim_end().is_empty() {
            return None;
        }
        Some((kind, indent + marker_len + gap))
    }
}
