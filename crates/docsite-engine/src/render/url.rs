/// Where a URL is going to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// `src` of an `<img>`.
    Image,
    /// `href` of an `<a>`.
    Link,
}

/// Replacement for any URL the policy rejects.
pub const BLOCKED_URL: &str = "#";

const SHARED_PREFIXES: [&str; 6] = ["http://", "https://", "//", "/", "./", "../"];
const EXTERNAL_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

impl UrlKind {
    /// The scheme allowed for this kind on top of the shared prefixes.
    fn extra_prefix(self) -> &'static str {
        match self {
            UrlKind::Image => "data:image/",
            UrlKind::Link => "mailto:",
        }
    }
}

/// Trims `raw` and returns it if it starts with an allowed prefix, else [`BLOCKED_URL`].
///
/// Prefixes match case-insensitively. The result is not escaped.
pub fn safe_url(raw: &str, kind: UrlKind) -> &str {
    let url = raw.trim();
    let allowed = SHARED_PREFIXES
        .into_iter()
        .chain(std::iter::once(kind.extra_prefix()))
        .any(|p| starts_with_ignore_case(url, p));
    if allowed {
        url
    } else {
        BLOCKED_URL
    }
}

/// Absolute `http(s)://` and protocol-relative URLs open in a new tab.
pub fn is_external(url: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|p| starts_with_ignore_case(url, p))
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
