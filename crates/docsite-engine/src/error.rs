use thiserror::Error;

/// Errors from [`crate::convert`].
///
/// Malformed Markdown is never an error; it degrades to escaped text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input is {size} bytes, over the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}
