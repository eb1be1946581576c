//! Error types for sanitization.
//!
//! There is exactly one failure class - input that cannot be structurally
//! parsed - and it never escapes the `sanitize*` functions: both variants
//! degrade to plain-text extraction. The `dom` helpers surface them for
//! callers that parse directly.

/// Error type for the parse and text-extraction stages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parsed document has no usable root container.
    #[error("parsed document has no usable root container")]
    NoRoot,

    /// The document yielded no text content.
    #[error("document yielded no text content")]
    NoText,
}

/// Result type alias for the parse and text-extraction stages.
pub type Result<T> = std::result::Result<T, Error>;
