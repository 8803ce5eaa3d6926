pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceLine};
pub use heading::Heading;
pub use list::{ListKind, ListMarker};
pub use thematic_break::ThematicBreak;
