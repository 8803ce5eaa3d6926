use std::mem;

use log::trace;

use crate::parsing::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, FenceKind, ListKind},
    types::{BlockKind, BlockNode},
};

/// Open multi-line construct.
///
/// Single-line blocks (headings, rules, paragraphs) are emitted directly
/// from `Default` and never hold state.
#[derive(Debug, Default)]
enum State {
    #[default]
    Default,
    InFence {
        kind: FenceKind,
        lang: Span,
        start: usize,
        opener_end: usize,
        last_line_end: usize,
        lines: Vec<Span>,
    },
    InBlockquote {
        start: usize,
        last_line_end: usize,
        lines: Vec<Span>,
    },
    InUnorderedList {
        start: usize,
        last_line_end: usize,
        items: Vec<Span>,
    },
    InOrderedList {
        start: usize,
        last_line_end: usize,
        items: Vec<Span>,
    },
}

/// Line-scanning state machine that groups classified lines into blocks.
///
/// A line that does not continue the open construct closes it and is then
/// evaluated again from `Default`. Every line is consumed exactly once, so
/// nothing emitted is ever revisited.
pub struct BlockBuilder {
    state: State,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Default,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.continue_open(c) {
            return;
        }
        self.close_open();
        self.open(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF: force-close whatever is still open, unterminated fences included
        self.close_open();
        self.out
    }

    /// Feeds `c` to the open construct. Returns false when it does not continue it.
    fn continue_open(&mut self, c: &LineClass) -> bool {
        match &mut self.state {
            State::Default => false,
            State::InFence {
                kind,
                last_line_end,
                lines,
                ..
            } => {
                *last_line_end = c.line.end;
                if let LineKind::Fence(fence) = &c.kind
                    && CodeFence::closes(*kind, fence)
                {
                    self.close_fence(true);
                } else {
                    lines.push(c.raw);
                }
                true
            }
            State::InBlockquote {
                last_line_end,
                lines,
                ..
            } => match c.kind {
                LineKind::Quote { content } => {
                    *last_line_end = c.line.end;
                    lines.push(content);
                    true
                }
                _ => false,
            },
            State::InUnorderedList {
                last_line_end,
                items,
                ..
            } => match c.kind {
                LineKind::ListItem {
                    kind: ListKind::Unordered,
                    content,
                } => {
                    *last_line_end = c.line.end;
                    items.push(content);
                    true
                }
                _ => false,
            },
            State::InOrderedList {
                last_line_end,
                items,
                ..
            } => match c.kind {
                LineKind::ListItem {
                    kind: ListKind::Ordered,
                    content,
                } => {
                    *last_line_end = c.line.end;
                    items.push(content);
                    true
                }
                _ => false,
            },
        }
    }

    fn open(&mut self, c: &LineClass) {
        let start = c.line.start;
        let last_line_end = c.line.end;
        match c.kind {
            LineKind::Blank => {}
            LineKind::Fence(fence) => {
                self.state = State::InFence {
                    kind: fence.kind,
                    lang: fence.lang,
                    start,
                    opener_end: c.raw.end,
                    last_line_end,
                    lines: vec![],
                };
            }
            LineKind::Quote { content } => {
                self.state = State::InBlockquote {
                    start,
                    last_line_end,
                    lines: vec![content],
                };
            }
            LineKind::ListItem {
                kind: ListKind::Unordered,
                content,
            } => {
                self.state = State::InUnorderedList {
                    start,
                    last_line_end,
                    items: vec![content],
                };
            }
            LineKind::ListItem {
                kind: ListKind::Ordered,
                content,
            } => {
                self.state = State::InOrderedList {
                    start,
                    last_line_end,
                    items: vec![content],
                };
            }
            LineKind::Heading { level, text } => {
                self.emit(BlockKind::Heading { level }, c.line, text);
            }
            LineKind::ThematicBreak => {
                self.emit(BlockKind::ThematicBreak, c.line, c.raw);
            }
            LineKind::Text { content } => {
                self.emit(BlockKind::Paragraph, c.line, content);
            }
        }
    }

    fn close_open(&mut self) {
        match mem::take(&mut self.state) {
            State::Default => {}
            state @ State::InFence { .. } => {
                self.state = state;
                self.close_fence(false);
            }
            State::InBlockquote {
                start,
                last_line_end,
                lines,
            } => {
                let content = covering(&lines, start);
                self.emit(
                    BlockKind::BlockQuote { lines },
                    Span::new(start, last_line_end),
                    content,
                );
            }
            State::InUnorderedList {
                start,
                last_line_end,
                items,
            } => {
                let content = covering(&items, start);
                self.emit(
                    BlockKind::List {
                        kind: ListKind::Unordered,
                        items,
                    },
                    Span::new(start, last_line_end),
                    content,
                );
            }
            State::InOrderedList {
                start,
                last_line_end,
                items,
            } => {
                let content = covering(&items, start);
                self.emit(
                    BlockKind::List {
                        kind: ListKind::Ordered,
                        items,
                    },
                    Span::new(start, last_line_end),
                    content,
                );
            }
        }
    }

    fn close_fence(&mut self, closed: bool) {
        if let State::InFence {
            kind,
            lang,
            start,
            opener_end,
            last_line_end,
            lines,
        } = mem::take(&mut self.state)
        {
            if !closed {
                trace!("unterminated code fence at byte {start}");
            }
            let content = covering(&lines, opener_end);
            self.emit(
                BlockKind::FencedCode {
                    kind,
                    lang,
                    lines,
                    closed,
                },
                Span::new(start, last_line_end),
                content,
            );
        }
    }

    fn emit(&mut self, kind: BlockKind, span: Span, content_span: Span) {
        self.out.push(BlockNode {
            kind,
            span,
            content_span,
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest span covering `parts`, or an empty span at `fallback`.
fn covering(parts: &[Span], fallback: usize) -> Span {
    match (parts.first(), parts.last()) {
        (Some(first), Some(last)) => Span::new(first.start, last.end.max(first.start)),
        _ => Span::new(fallback, fallback),
    }
}
