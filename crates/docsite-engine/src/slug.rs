use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// ASCII-lower-cases `text` and turns every run of characters outside `[a-z0-9]`
/// into a single `-`, without leading or trailing dashes.
///
/// Deterministic and pure. The result may be empty and is not unique across
/// a document; see [`HeadingIds`] for that.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}

/// How heading ids are derived from slugs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingIdPolicy {
    /// The slug as is. Repeated headings share an id.
    #[default]
    Slug,
    /// Repeats get `-2`, `-3`, ... suffixes and an empty slug becomes `section`.
    Unique,
}

/// Hands out heading ids for one document.
#[derive(Debug, Default)]
pub struct HeadingIds {
    policy: HeadingIdPolicy,
    issued: HashSet<String>,
    /// Next suffix to try for each repeated base.
    next_suffix: HashMap<String, u32>,
}

impl HeadingIds {
    pub const EMPTY_FALLBACK: &'static str = "section";

    pub fn new(policy: HeadingIdPolicy) -> Self {
        Self {
            policy,
            issued: HashSet::new(),
            next_suffix: HashMap::new(),
        }
    }

    pub fn assign(&mut self, text: &str) -> String {
        let slug = slugify(text);
        match self.policy {
            HeadingIdPolicy::Slug => slug,
            HeadingIdPolicy::Unique => {
                let base = if slug.is_empty() {
                    Self::EMPTY_FALLBACK.to_string()
                } else {
                    slug
                };
                let mut id = base.clone();
                if self.issued.contains(&id) {
                    let next = self.next_suffix.entry(base.clone()).or_insert(2);
                    // an explicit heading may already hold a generated form
                    loop {
                        id = format!("{base}-{next}");
                        *next += 1;
                        if !self.issued.contains(&id) {
                            break;
                        }
                    }
                }
                self.issued.insert(id.clone());
                id
            }
        }
    }
}
