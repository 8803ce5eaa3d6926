//! # Parsing
//!
//! Markdown is parsed in two layers over borrowed source text:
//!
//! - **`blocks`**: line classification and a block builder state machine
//! - **`inline`**: cursor-based inline parsing over a single block line
//!
//! All nodes hold [`span::Span`]s into the source; nothing is escaped or
//! copied during parsing. Escaping happens once, when HTML is rendered.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use lines::lines_with_spans;
use span::Span;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(src: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(src) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Inline parse of one content span (a heading, paragraph, item or quote line).
pub fn parse_inline_span(src: &str, span: Span) -> Vec<inline::InlineNode> {
    inline::parse_inline(span.start, span.slice(src))
}
