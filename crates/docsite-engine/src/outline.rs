use serde::{Deserialize, Serialize};

use crate::escape::escape_into;

/// One heading of a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level, 1..=6.
    pub level: u8,
    /// Plain heading text, trimmed and unescaped.
    pub text: String,
    pub id: String,
}

impl OutlineEntry {
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
        }
    }
}

/// A heading with the headings nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    #[serde(flatten)]
    pub entry: OutlineEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

/// Nested view of a flat outline.
///
/// Every entry becomes a child of the nearest preceding entry with a smaller
/// level; entries with no such ancestor are roots. Skipped levels are fine:
/// an `h3` directly under an `h1` is simply its child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutlineTree {
    pub roots: Vec<OutlineNode>,
}

impl OutlineTree {
    pub fn from_entries(entries: &[OutlineEntry]) -> Self {
        let mut i = 0;
        Self {
            roots: nest(entries, &mut i, 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        fn count(nodes: &[OutlineNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }
}

fn nest(entries: &[OutlineEntry], i: &mut usize, parent_level: u8) -> Vec<OutlineNode> {
    let mut nodes = vec![];
    while let Some(entry) = entries.get(*i) {
        if entry.level <= parent_level {
            break;
        }
        *i += 1;
        let children = nest(entries, i, entry.level);
        nodes.push(OutlineNode {
            entry: entry.clone(),
            children,
        });
    }
    nodes
}

/// Renders the flat sidebar outline, indenting 16px per level below 1.
///
/// An empty outline renders as an empty string.
pub fn render_outline_html(entries: &[OutlineEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = String::from("<b>Outline</b><ul class='outline-list'>");
    for entry in entries {
        let indent = 16 * (u32::from(entry.level).saturating_sub(1));
        out.push_str(&format!("<li style='margin-left:{indent}px'><a href='#"));
        escape_into(&entry.id, &mut out);
        out.push_str("'>");
        escape_into(&entry.text, &mut out);
        out.push_str("</a></li>");
    }
    out.push_str("</ul>");
    out
}

/// Renders the outline as nested lists.
pub fn render_outline_tree_html(tree: &OutlineTree) -> String {
    if tree.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    write_nodes(&tree.roots, "outline-list", &mut out);
    out
}

fn write_nodes(nodes: &[OutlineNode], class: &str, out: &mut String) {
    out.push_str(&format!("<ul class='{class}'>"));
    for node in nodes {
        out.push_str("<li><a href='#");
        escape_into(&node.entry.id, out);
        out.push_str("'>");
        escape_into(&node.entry.text, out);
        out.push_str("</a>");
        if !node.children.is_empty() {
            write_nodes(&node.children, "outline-sublist", out);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entries(levels: &[u8]) -> Vec<OutlineEntry> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| OutlineEntry::new(level, format!("H{i}"), format!("h{i}")))
            .collect()
    }

    fn shape(nodes: &[OutlineNode]) -> String {
        nodes
            .iter()
            .map(|n| {
                if n.children.is_empty() {
                    n.entry.id.clone()
                } else {
                    format!("{}({})", n.entry.id, shape(&n.children))
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn nests_under_nearest_smaller_level() {
        let tree = OutlineTree::from_entries(&entries(&[1, 2, 3, 2, 1, 3]));
        assert_eq!(shape(&tree.roots), "h0(h1(h2),h3),h4(h5)");
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn leading_deep_heading_is_a_root() {
        let tree = OutlineTree::from_entries(&entries(&[3, 1, 2]));
        assert_eq!(shape(&tree.roots), "h0,h1(h2)");
    }

    #[test]
    fn flat_render_indents_and_escapes() {
        let outline = vec![
            OutlineEntry::new(1, "Intro", "intro"),
            OutlineEntry::new(3, "A & <B>", "a-b"),
        ];
        assert_eq!(
            render_outline_html(&outline),
            "<b>Outline</b><ul class='outline-list'>\
             <li style='margin-left:0px'><a href='#intro'>Intro</a></li>\
             <li style='margin-left:32px'><a href='#a-b'>A &amp; &lt;B&gt;</a></li>\
             </ul>"
        );
    }

    #[test]
    fn empty_outline_renders_nothing() {
        assert_eq!(render_outline_html(&[]), "");
        assert_eq!(render_outline_tree_html(&OutlineTree::default()), "");
    }

    #[test]
    fn tree_render_nests_lists() {
        let tree = OutlineTree::from_entries(&entries(&[1, 2]));
        assert_eq!(
            render_outline_tree_html(&tree),
            "<ul class='outline-list'><li><a href='#h0'>H0</a>\
             <ul class='outline-sublist'><li><a href='#h1'>H1</a></li></ul>\
             </li></ul>"
        );
    }

    #[test]
    fn tree_serializes_children_inline() {
        let tree = OutlineTree::from_entries(&entries(&[1, 2]));
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"level": 1, "text": "H0", "id": "h0", "children": [
                    {"level": 2, "text": "H1", "id": "h1"}
                ]}
            ])
        );
    }
}
