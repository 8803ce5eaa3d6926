//! HTML emission for parsed documents.
//!
//! - **`html`**: block and inline rendering with outline collection
//! - **`url`**: allow-list policy for link and image targets
//! - **`sanitize`**: final pass neutralizing any `<` outside the tag allow-list

pub mod html;
pub mod sanitize;
pub mod url;

pub use html::{HtmlRenderer, render_inline};
pub use sanitize::neutralize_stray_tags;
pub use url::{BLOCKED_URL, UrlKind, is_external, safe_url};
