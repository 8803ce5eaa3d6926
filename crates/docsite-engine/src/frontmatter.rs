use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parsing::lines::lines_with_spans;

/// Delimiter line opening and closing a front matter block.
pub const DELIMITER: &str = "---";

/// A front matter value: a scalar or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

/// The `---` block at the top of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    /// Text between the delimiters, trimmed.
    pub raw: String,
    pub fields: BTreeMap<String, MetaValue>,
}

fn field_regex() -> &'static Regex {
    static FIELD: OnceLock<Regex> = OnceLock::new();
    FIELD.get_or_init(|| Regex::new(r"^([A-Za-z0-9_-]+):\s*(.*)$").expect("Invalid field regex"))
}

fn item_regex() -> &'static Regex {
    static ITEM: OnceLock<Regex> = OnceLock::new();
    ITEM.get_or_init(|| Regex::new(r"^\s*-\s+(.*)$").expect("Invalid list item regex"))
}

fn unquote(s: &str) -> &str {
    s.trim_matches(['"', '\'', ' ', '\t'])
}

impl FrontMatter {
    /// Reads `key: value` fields from the block body.
    ///
    /// A key with an empty value collects the `- item` lines that follow it;
    /// a `[a, b]` value is an inline list. Other lines are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut fields: BTreeMap<String, MetaValue> = BTreeMap::new();
        let mut list_key: Option<String> = None;

        for line in raw.lines() {
            if let Some(key) = &list_key
                && let Some(caps) = item_regex().captures(line)
            {
                let item = unquote(&caps[1]).to_string();
                match fields.get_mut(key) {
                    Some(MetaValue::List(items)) => items.push(item),
                    Some(slot) => *slot = MetaValue::List(vec![item]),
                    None => {}
                }
                continue;
            }

            list_key = None;
            let Some(caps) = field_regex().captures(line) else {
                continue;
            };
            let key = caps[1].to_string();
            let value = unquote(&caps[2]);

            let value = if value.is_empty() {
                list_key = Some(key.clone());
                MetaValue::Text(String::new())
            } else if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
                MetaValue::List(
                    inner
                        .split(',')
                        .map(unquote)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            } else {
                MetaValue::Text(value.to_string())
            };
            fields.insert(key, value);
        }

        Self {
            raw: raw.trim().to_string(),
            fields,
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    /// The value of `key` when it is a scalar.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }
}

/// Splits a leading front matter block from the document body.
///
/// The document must start with a `---` line and a later `---` line must close
/// the block; otherwise there is no front matter and the whole input is body.
pub fn split_front_matter(doc: &str) -> (Option<FrontMatter>, &str) {
    let mut lines = lines_with_spans(doc);
    let Some(first) = lines.next() else {
        return (None, doc);
    };
    if first.text.trim_end() != DELIMITER {
        return (None, doc);
    }

    for lr in lines {
        if lr.text.trim_end() == DELIMITER {
            let raw = &doc[first.span.end..lr.span.start];
            return (Some(FrontMatter::parse(raw)), &doc[lr.span.end..]);
        }
    }
    (None, doc)
}
