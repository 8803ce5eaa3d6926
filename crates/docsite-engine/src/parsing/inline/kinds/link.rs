/// Delimiters shared by links and images.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const TEXT_END: &'static str = "]";
    pub const URL_OPEN: &'static str = "(";
    pub const URL_CLOSE: &'static str = ")";
}

/// `![alt](url)`: a link prefixed by a bang.
pub struct Image;

impl Image {
    pub const OPEN: &'static str = "![";
}
