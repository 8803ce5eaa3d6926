use crate::parsing::span::Span;

/// Which marker opened a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Local facts about a line that starts with a fence marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceLine {
    pub kind: FenceKind,
    /// Language token after the marker (may be empty).
    pub lang: Span,
    /// Nothing but spaces or tabs follows the marker, so the line can close a fence.
    pub bare: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn kind(text: &str) -> Option<FenceKind> {
        if text.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if text.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// Reads a fence line. `base` is the absolute offset of `text`.
    ///
    /// The language token is `[A-Za-z0-9_-]*` after optional spaces or tabs;
    /// anything following it is ignored.
    pub fn line(text: &str, base: usize) -> Option<FenceLine> {
        let kind = Self::kind(text)?;
        let marker_len = Self::BACKTICKS.len();
        let rest = &text[marker_len..];
        let gap = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        let lang_len = rest[gap..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
            .count();
        let lang_start = base + marker_len + gap;

        Some(FenceLine {
            kind,
            lang: Span::new(lang_start, lang_start + lang_len),
            bare: rest.bytes().all(|b| b == b' ' || b == b'\t'),
        })
    }

    pub fn closes(open: FenceKind, line: &FenceLine) -> bool {
        line.bare && line.kind == open
    }
}
