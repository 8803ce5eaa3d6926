/// Paired delimiters for the emphasis family.
///
/// Longer markers are listed first; `**` must be tried before `*`.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG: [&'static str; 2] = ["**", "__"];
    pub const EM: [&'static str; 2] = ["*", "_"];
    pub const STRIKE: &'static str = "~~";

    /// Underscore markers do not open or close inside a word.
    pub fn is_intraword_sensitive(marker: &str) -> bool {
        marker.starts_with('_')
    }
}
