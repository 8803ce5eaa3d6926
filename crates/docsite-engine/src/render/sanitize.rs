use std::sync::OnceLock;

use log::warn;
use regex::Regex;

fn allowed_tag_regex() -> &'static Regex {
    static ALLOWED_TAG: OnceLock<Regex> = OnceLock::new();
    ALLOWED_TAG.get_or_init(|| {
        Regex::new(r"(?i)^</?(?:h[1-6]|p|ul|ol|li|blockquote|pre|code|img|a|strong|em|del|br|hr)[\s>]")
            .expect("Invalid allowed tag regex")
    })
}

/// Rewrites every `<` that does not open an allow-listed tag to `&lt;`.
///
/// A tag counts as allowed when `<name` or `</name` is followed by whitespace
/// or `>`. Output produced from escaped text comes back unchanged.
pub fn neutralize_stray_tags(html: String) -> String {
    let re = allowed_tag_regex();
    let mut out: Option<String> = None;
    let mut copied = 0;

    for (i, _) in html.match_indices('<') {
        if re.is_match(&html[i..]) {
            continue;
        }
        let buf = out.get_or_insert_with(|| String::with_capacity(html.len() + 16));
        buf.push_str(&html[copied..i]);
        buf.push_str("&lt;");
        copied = i + 1;
    }

    match out {
        Some(mut buf) => {
            warn!("neutralized stray markup in rendered html");
            buf.push_str(&html[copied..]);
            buf
        }
        None => html,
    }
}
