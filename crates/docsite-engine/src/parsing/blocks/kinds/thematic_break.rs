/// Horizontal rule: 3+ of the same `-`, `*` or `_`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];
    pub const MAX_INDENT: usize = 3;

    pub fn matches(text: &str) -> bool {
        let rest = text.trim_start_matches(' ');
        if text.len() - rest.len() > Self::MAX_INDENT {
            return false;
        }

        let mut marks = rest.bytes().filter(|&b| b != b' ');
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }

        let mut count = 1;
        for b in marks {
            if b != first {
                return false;
            }
            count += 1;
        }
        count >= 3
    }
}
