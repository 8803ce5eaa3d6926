use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` so `s` is inert in text and in quoted attributes.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}

/// Appends the escaped form of `s` to `out`.
pub fn escape_into(s: &str, out: &mut String) {
    html_escape::encode_quoted_attribute_to_string(s, out);
}
