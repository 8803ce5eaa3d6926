//! Block and inline parser tests over small documents.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{BlockKind, FenceKind, ListKind},
    inline::InlineNode,
    parse_document, parse_inline_span,
};

fn kinds(src: &str) -> Vec<BlockKind> {
    let doc = parse_document(src);
    invariants::check(src, &doc.blocks);
    doc.blocks.into_iter().map(|b| b.kind).collect()
}

fn texts(src: &str) -> Vec<String> {
    let doc = parse_document(src);
    doc.blocks
        .iter()
        .map(|b| b.content_span.slice(src).to_string())
        .collect()
}

#[test]
fn each_text_line_is_its_own_paragraph() {
    let src = "one\ntwo\n\nthree\n";
    assert_eq!(
        kinds(src),
        vec![BlockKind::Paragraph, BlockKind::Paragraph, BlockKind::Paragraph]
    );
    assert_eq!(texts(src), vec!["one", "two", "three"]);
}

#[test]
fn blank_lines_never_produce_blocks() {
    assert!(kinds("\n\n   \n\t\n").is_empty());
    assert!(kinds("").is_empty());
}

#[test]
fn contiguous_items_form_one_list() {
    let src = "- a\n- b\n- c\n";
    match kinds(src).as_slice() {
        [BlockKind::List { kind, items }] => {
            assert_eq!(*kind, ListKind::Unordered);
            let items: Vec<_> = items.iter().map(|s| s.slice(src)).collect();
            assert_eq!(items, vec!["a", "b", "c"]);
        }
        other => panic!("expected one list, got {other:?}"),
    }
}

#[test]
fn list_kind_change_starts_a_new_list() {
    let src = "- a\n1. b\n2. c\n";
    let kinds = kinds(src);
    assert_eq!(kinds.len(), 2);
    assert!(matches!(&kinds[0], BlockKind::List { kind: ListKind::Unordered, items } if items.len() == 1));
    assert!(matches!(&kinds[1], BlockKind::List { kind: ListKind::Ordered, items } if items.len() == 2));
}

#[test]
fn blank_line_closes_list() {
    let kinds = kinds("- a\n\n- b\n");
    assert_eq!(kinds.len(), 2);
}

#[test]
fn text_line_after_list_is_a_paragraph() {
    let kinds = kinds("- a\ntail\n");
    assert!(matches!(kinds[0], BlockKind::List { .. }));
    assert_eq!(kinds[1], BlockKind::Paragraph);
}

#[test]
fn quote_lines_are_grouped_with_prefix_removed() {
    let src = "> first\n>second\n> \nafter\n";
    match kinds(src).as_slice() {
        [BlockKind::BlockQuote { lines }, BlockKind::Paragraph] => {
            let lines: Vec<_> = lines.iter().map(|s| s.slice(src)).collect();
            assert_eq!(lines, vec!["first", "second", ""]);
        }
        other => panic!("unexpected blocks {other:?}"),
    }
}

#[test]
fn fence_content_is_opaque() {
    let src = "```md\n# not a heading\n- not a list\n```\n";
    match kinds(src).as_slice() {
        [BlockKind::FencedCode {
            kind,
            lang,
            lines,
            closed,
        }] => {
            assert_eq!(*kind, FenceKind::Backticks);
            assert_eq!(lang.slice(src), "md");
            assert!(*closed);
            let lines: Vec<_> = lines.iter().map(|s| s.slice(src)).collect();
            assert_eq!(lines, vec!["# not a heading", "- not a list"]);
        }
        other => panic!("expected one fence, got {other:?}"),
    }
}

#[test]
fn fence_only_closes_on_matching_marker() {
    let src = "~~~\n```\ncode\n~~~\n";
    match kinds(src).as_slice() {
        [BlockKind::FencedCode { lines, closed, .. }] => {
            assert!(*closed);
            assert_eq!(lines.len(), 2);
        }
        other => panic!("expected one fence, got {other:?}"),
    }
}

#[test]
fn unterminated_fence_keeps_remaining_lines() {
    let src = "intro\n```\nlet x = 1;\n\nlet y = 2;";
    match kinds(src).as_slice() {
        [BlockKind::Paragraph, BlockKind::FencedCode { lines, closed, .. }] => {
            assert!(!*closed);
            let lines: Vec<_> = lines.iter().map(|s| s.slice(src)).collect();
            assert_eq!(lines, vec!["let x = 1;", "", "let y = 2;"]);
        }
        other => panic!("unexpected blocks {other:?}"),
    }
}

#[test]
fn fence_preserves_indentation_and_crlf_is_stripped() {
    let src = "```\r\n    indented\r\n```\r\n";
    match kinds(src).as_slice() {
        [BlockKind::FencedCode { lines, closed, .. }] => {
            assert!(*closed);
            assert_eq!(lines[0].slice(src), "    indented");
        }
        other => panic!("unexpected blocks {other:?}"),
    }
}

#[test]
fn headings_and_rules() {
    let src = "# Title\n---\n###### Six\n####### seven\n";
    assert_eq!(
        kinds(src),
        vec![
            BlockKind::Heading { level: 1 },
            BlockKind::ThematicBreak,
            BlockKind::Heading { level: 6 },
            BlockKind::Paragraph,
        ]
    );
    assert_eq!(texts(src)[0], "Title");
}

#[test]
fn inline_constructs_in_order() {
    let src = "see `code` and ![alt](/a.png) [docs](./d) **b** *i* ~~s~~";
    let nodes = parse_inline_span(src, crate::parsing::span::Span::new(0, src.len()));
    let names: Vec<&str> = nodes
        .iter()
        .filter(|n| !matches!(n, InlineNode::Text(_)))
        .map(|n| match n {
            InlineNode::CodeSpan { .. } => "code",
            InlineNode::Image { .. } => "image",
            InlineNode::Link { .. } => "link",
            InlineNode::Strong { .. } => "strong",
            InlineNode::Emphasis { .. } => "em",
            InlineNode::Strikethrough { .. } => "del",
            InlineNode::Text(_) => unreachable!(),
        })
        .collect();
    assert_eq!(names, vec!["code", "image", "link", "strong", "em", "del"]);
}
