//! Error types for searcher-widgets.
//!
//! Searching itself cannot fail: no matches are ordinary rows. Errors only
//! come from loosely-typed boundaries, i.e. host responses and options that
//! arrive as JSON.

use thiserror::Error;

/// Errors raised while decoding host responses or options.
#[derive(Error, Debug)]
pub enum SearcherError {
    /// A host search response lacked a required field.
    #[error("search response is missing required field `{0}`")]
    MissingResponseField(&'static str),

    /// A host search response field had the wrong shape.
    #[error("search response field `{field}` must be {expected}")]
    InvalidResponseField {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// Options could not be decoded.
    #[error("invalid searcher options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SearcherError>;
