use crate::{
    escape::escape_into,
    outline::OutlineEntry,
    parsing::{
        blocks::{BlockKind, BlockNode, ListKind},
        inline::InlineNode,
        parse_inline_span,
        span::Span,
    },
    slug::{HeadingIdPolicy, HeadingIds},
};

use super::url::{UrlKind, is_external, safe_url};

/// Renders parsed blocks to HTML while collecting the outline.
///
/// Source text is escaped exactly once, at the point it is written; every
/// tag in the output is produced here.
pub struct HtmlRenderer<'a> {
    src: &'a str,
    ids: HeadingIds,
    outline: Vec<OutlineEntry>,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(src: &'a str, policy: HeadingIdPolicy) -> Self {
        Self {
            src,
            ids: HeadingIds::new(policy),
            outline: vec![],
        }
    }

    /// Blocks are joined by `\n`; non-empty output ends with `\n`.
    pub fn render(mut self, blocks: &[BlockNode]) -> (String, Vec<OutlineEntry>) {
        let mut out = String::with_capacity(self.src.len() + self.src.len() / 2);
        for block in blocks {
            self.block(block, &mut out);
            out.push('\n');
        }
        (out, self.outline)
    }

    fn block(&mut self, b: &BlockNode, out: &mut String) {
        match &b.kind {
            BlockKind::Paragraph => {
                out.push_str("<p>");
                self.inline(b.content_span, out);
                out.push_str("</p>");
            }
            BlockKind::Heading { level } => {
                let text = b.content_span.slice(self.src);
                let id = self.ids.assign(text);
                out.push_str(&format!("<h{level} id=\""));
                escape_into(&id, out);
                out.push_str("\">");
                self.inline(b.content_span, out);
                out.push_str(&format!("</h{level}>"));
                self.outline.push(OutlineEntry::new(*level, text, id));
            }
            BlockKind::ThematicBreak => out.push_str("<hr>"),
            BlockKind::FencedCode { lang, lines, .. } => {
                out.push_str("<pre><code");
                if !lang.is_empty() {
                    out.push_str(" class=\"language-");
                    escape_into(lang.slice(self.src), out);
                    out.push('"');
                }
                out.push('>');
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    escape_into(line.slice(self.src), out);
                }
                out.push_str("</code></pre>");
            }
            BlockKind::BlockQuote { lines } => {
                out.push_str("<blockquote>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    self.inline(*line, out);
                }
                out.push_str("</blockquote>");
            }
            BlockKind::List { kind, items } => {
                let tag = match kind {
                    ListKind::Unordered => "ul",
                    ListKind::Ordered => "ol",
                };
                out.push_str(&format!("<{tag}>\n"));
                for item in items {
                    out.push_str("<li>");
                    self.inline(*item, out);
                    out.push_str("</li>\n");
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
    }

    fn inline(&self, span: Span, out: &mut String) {
        render_inline(self.src, &parse_inline_span(self.src, span), out);
    }
}

/// Writes inline nodes, escaping every piece of source text they cover.
pub fn render_inline(src: &str, nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => escape_into(sp.slice(src), out),
            InlineNode::CodeSpan { inner, .. } => wrap("code", inner.slice(src), out),
            InlineNode::Strong { inner, .. } => wrap("strong", inner.slice(src), out),
            InlineNode::Emphasis { inner, .. } => wrap("em", inner.slice(src), out),
            InlineNode::Strikethrough { inner, .. } => wrap("del", inner.slice(src), out),
            InlineNode::Image { alt, url, .. } => {
                out.push_str("<img src=\"");
                escape_into(safe_url(url.slice(src), UrlKind::Image), out);
                out.push_str("\" alt=\"");
                escape_into(alt.slice(src), out);
                out.push_str("\">");
            }
            InlineNode::Link { text, url, .. } => {
                let href = safe_url(url.slice(src), UrlKind::Link);
                out.push_str("<a href=\"");
                escape_into(href, out);
                out.push('"');
                if is_external(href) {
                    out.push_str(" target=\"_blank\" rel=\"noopener\"");
                }
                out.push('>');
                escape_into(text.slice(src), out);
                out.push_str("</a>");
            }
        }
    }
}

fn wrap(tag: &str, text: &str, out: &mut String) {
    out.push_str(&format!("<{tag}>"));
    escape_into(text, out);
    out.push_str(&format!("</{tag}>"));
}
