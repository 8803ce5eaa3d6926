use crate::parsing::span::Span;

use super::{
    cursor::{Closer, Cursor},
    kinds::{CodeSpan, Emphasis, Image, Link},
    types::InlineNode,
};

type TryParse = fn(&mut Cursor<'_>) -> Option<InlineNode>;

/// Constructs in precedence order. Code spans come first because they are raw zones.
const PARSERS: [TryParse; 6] = [
    try_parse_code_span,
    try_parse_image,
    try_parse_link,
    try_parse_strong,
    try_parse_emphasis,
    try_parse_strikethrough,
];

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the document where `s` begins (for absolute span positions)
/// - `s`: One line of block content
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    'scan: while !cur.eof() {
        for try_parse in PARSERS {
            if let Some(node) = try_parse(&mut cur) {
                let full = node.full();
                flush_text(&mut out, text_start, full.start);
                text_start = full.end;
                out.push(node);
                continue 'scan;
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// `` `x` `` with at least one character and no backtick inside.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(CodeSpan::TICK.as_bytes()) {
        return None;
    }
    let open = CodeSpan::TICK.len();
    let close = cur.find_from(open, CodeSpan::TICK, Closer::Any)?;
    if close == cur.i + open {
        return None;
    }

    let start = cur.pos();
    let inner = Span::new(start + open, cur.base + close);
    cur.i = close + CodeSpan::TICK.len();

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner,
    })
}

fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Image::OPEN.as_bytes()) {
        return None;
    }
    let start = cur.pos();
    let (alt, url) = try_parse_target(cur, Image::OPEN.len(), true)?;
    Some(InlineNode::Image {
        full: Span::new(start, cur.pos()),
        alt,
        url,
    })
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Link::OPEN.as_bytes()) {
        return None;
    }
    let start = cur.pos();
    let (text, url) = try_parse_target(cur, Link::OPEN.len(), false)?;
    Some(InlineNode::Link {
        full: Span::new(start, cur.pos()),
        text,
        url,
    })
}

/// Reads `…](url)` after an opener of `open` bytes.
///
/// The bracketed text may not contain `]` and the url may not contain `)`;
/// the url must be non-empty. On success the cursor sits after `)`.
/// On failure the cursor is left untouched.
fn try_parse_target(
    cur: &mut Cursor<'_>,
    open: usize,
    allow_empty_text: bool,
) -> Option<(Span, Span)> {
    let text_start = cur.i + open;
    let text_end = cur.find_from(open, Link::TEXT_END, Closer::Any)?;
    if text_end == text_start && !allow_empty_text {
        return None;
    }

    let url_start = text_end + Link::TEXT_END.len();
    if !cur.s[url_start..].starts_with(Link::URL_OPEN) {
        return None;
    }
    let url_start = url_start + Link::URL_OPEN.len();
    let url_end = cur.find_at(url_start, Link::URL_CLOSE, Closer::Any)?;
    if url_end == url_start {
        return None;
    }

    let text = Span::new(cur.base + text_start, cur.base + text_end);
    let url = Span::new(cur.base + url_start, cur.base + url_end);
    cur.i = url_end + Link::URL_CLOSE.len();
    Some((text, url))
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    Emphasis::STRONG.into_iter().find_map(|marker| {
        let (full, inner) = try_parse_paired(cur, marker)?;
        Some(InlineNode::Strong { full, inner })
    })
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    Emphasis::EM.into_iter().find_map(|marker| {
        let (full, inner) = try_parse_paired(cur, marker)?;
        Some(InlineNode::Emphasis { full, inner })
    })
}

fn try_parse_strikethrough(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (full, inner) = try_parse_paired(cur, Emphasis::STRIKE)?;
    Some(InlineNode::Strikethrough { full, inner })
}

/// `{marker}x{marker}` with the nearest closer after at least one character.
///
/// Underscore markers must not touch a word character on their outer side.
fn try_parse_paired(cur: &mut Cursor<'_>, marker: &'static str) -> Option<(Span, Span)> {
    if !cur.starts_with(marker.as_bytes()) {
        return None;
    }
    let word_bound = Emphasis::is_intraword_sensitive(marker);
    if word_bound && cur.prev_char().is_some_and(char::is_alphanumeric) {
        return None;
    }

    let closer = if word_bound {
        Closer::NotBeforeWord
    } else {
        Closer::Any
    };

    let inner_start = cur.i + marker.len();
    let close = cur.find_from(marker.len() + 1, marker, closer)?;

    let start = cur.pos();
    let inner = Span::new(cur.base + inner_start, cur.base + close);
    cur.i = close + marker.len();
    Some((Span::new(start, cur.pos()), inner))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn texts(src: &str) -> Vec<(&'static str, &str)> {
        parse_inline(0, src)
            .into_iter()
            .map(|n| match n {
                InlineNode::Text(sp) => ("text", sp.slice(src)),
                InlineNode::CodeSpan { inner, .. } => ("code", inner.slice(src)),
                InlineNode::Image { alt, .. } => ("image", alt.slice(src)),
                InlineNode::Link { text, .. } => ("link", text.slice(src)),
                InlineNode::Strong { inner, .. } => ("strong", inner.slice(src)),
                InlineNode::Emphasis { inner, .. } => ("em", inner.slice(src)),
                InlineNode::Strikethrough { inner, .. } => ("del", inner.slice(src)),
            })
            .collect()
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 11))]);
    }

    #[test]
    fn parse_code_span_with_base_offset() {
        let nodes = parse_inline(100, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span::new(100, 106),
                inner: Span::new(101, 105),
            }]
        );
    }

    #[test]
    fn code_span_suppresses_other_constructs() {
        assert_eq!(texts("`**not bold**`"), vec![("code", "**not bold**")]);
    }

    #[test]
    fn image_and_link_parts() {
        let src = "![logo](/l.png) [home](https://x.y)";
        match parse_inline(0, src).as_slice() {
            [
                InlineNode::Image { alt, url, .. },
                InlineNode::Text(_),
                InlineNode::Link { text, url: href, .. },
            ] => {
                assert_eq!(alt.slice(src), "logo");
                assert_eq!(url.slice(src), "/l.png");
                assert_eq!(text.slice(src), "home");
                assert_eq!(href.slice(src), "https://x.y");
            }
            other => panic!("unexpected nodes {other:?}"),
        }
    }

    #[test]
    fn image_alt_may_be_empty_but_link_text_may_not() {
        assert_eq!(texts("![](a.png)"), vec![("image", "")]);
        assert_eq!(texts("[](a)"), vec![("text", "[](a)")]);
    }

    #[rstest]
    #[case::bold_stars("**b**", "strong", "b")]
    #[case::bold_underscores("__b__", "strong", "b")]
    #[case::italic_star("*i*", "em", "i")]
    #[case::italic_underscore("_i_", "em", "i")]
    #[case::strike("~~s~~", "del", "s")]
    #[case::underscores_inside_content("_snake_case_", "em", "snake_case")]
    fn paired_markers(#[case] src: &str, #[case] kind: &str, #[case] inner: &str) {
        assert_eq!(texts(src), vec![(kind, inner)]);
    }

    #[test]
    fn paired_markers_are_non_greedy() {
        assert_eq!(
            texts("**a** and **b**"),
            vec![
                ("strong", "a"),
                ("text", " and "),
                ("strong", "b"),
            ]
        );
    }

    #[rstest]
    #[case::unclosed_code("`unclosed code")]
    #[case::empty_code("``")]
    #[case::unclosed_link("[text](no close")]
    #[case::bracket_without_url("[text] (url)")]
    #[case::empty_url("[text]()")]
    #[case::unclosed_bold("**bold")]
    #[case::empty_strike("~~~~")]
    #[case::intraword_underscores("snake_case_name")]
    fn unmatched_input_stays_text(#[case] src: &str) {
        assert_eq!(texts(src), vec![("text", src)]);
    }

    #[rstest]
    #[case::brackets("[")]
    #[case::image_openers("![x](")]
    #[case::links_without_close("[a](")]
    #[case::tick_pairs("``")]
    #[case::underscores_before_words(" _a")]
    fn long_runs_of_unclosed_openers_stay_text(#[case] unit: &str) {
        let src = unit.repeat(50_000);
        let nodes = parse_inline(0, &src);
        assert!(nodes.iter().all(|n| matches!(n, InlineNode::Text(_))));
        assert_eq!(nodes.last().map(|n| n.full().end), Some(src.len()));
    }

    #[test]
    fn multibyte_text_between_constructs() {
        assert_eq!(
            texts("héllo *wörld* ✓"),
            vec![
                ("text", "héllo "),
                ("em", "wörld"),
                ("text", " ✓"),
            ]
        );
    }
}
