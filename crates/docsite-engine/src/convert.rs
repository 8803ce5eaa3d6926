use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::ConvertError,
    outline::OutlineEntry,
    parsing::parse_document,
    render::{HtmlRenderer, neutralize_stray_tags},
    slug::HeadingIdPolicy,
};

/// Inputs larger than this are rejected unless the limit is changed.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 2 * 1024 * 1024;

/// Per-conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// `None` disables the size check.
    pub max_input_bytes: Option<usize>,
    pub heading_ids: HeadingIdPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            heading_ids: HeadingIdPolicy::default(),
        }
    }
}

/// Rendered HTML plus the headings found while rendering it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub html: String,
    pub outline: Vec<OutlineEntry>,
}

/// Converts Markdown to safe HTML.
///
/// Holds only options, so one converter can be shared across threads and
/// every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, markdown: &str) -> Result<Conversion, ConvertError> {
        if let Some(limit) = self.options.max_input_bytes
            && markdown.len() > limit
        {
            warn!(
                "rejecting markdown input of {} bytes (limit {limit})",
                markdown.len()
            );
            return Err(ConvertError::InputTooLarge {
                size: markdown.len(),
                limit,
            });
        }

        let doc = parse_document(markdown);
        let (html, outline) =
            HtmlRenderer::new(markdown, self.options.heading_ids).render(&doc.blocks);
        let html = neutralize_stray_tags(html);

        debug!(
            "converted {} bytes: {} blocks, {} headings, {} bytes of html",
            markdown.len(),
            doc.blocks.len(),
            outline.len(),
            html.len()
        );
        Ok(Conversion { html, outline })
    }
}

/// Converts with [`ConvertOptions::default`].
pub fn convert(markdown: &str) -> Result<Conversion, ConvertError> {
    Converter::default().convert(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_input() {
        let converter = Converter::new(ConvertOptions {
            max_input_bytes: Some(4),
            ..ConvertOptions::default()
        });
        assert_eq!(
            converter.convert("12345"),
            Err(ConvertError::InputTooLarge { size: 5, limit: 4 })
        );
        assert!(converter.convert("1234").is_ok());
    }

    #[test]
    fn no_limit_accepts_anything() {
        let converter = Converter::new(ConvertOptions {
            max_input_bytes: None,
            ..ConvertOptions::default()
        });
        let big = "a".repeat(DEFAULT_MAX_INPUT_BYTES + 1);
        assert!(converter.convert(&big).is_ok());
    }

    #[test]
    fn unique_policy_is_applied() {
        let converter = Converter::new(ConvertOptions {
            heading_ids: HeadingIdPolicy::Unique,
            ..ConvertOptions::default()
        });
        let conv = converter.convert("# A\n# A\n").unwrap();
        let ids: Vec<_> = conv.outline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a-2"]);
        assert!(conv.html.contains("<h1 id=\"a-2\">A</h1>"));
    }

    #[test]
    fn converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
