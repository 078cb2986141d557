//! Error types for the rekindle hot-update pipeline

use thiserror::Error;

/// Errors produced outside the per-event pipeline.
///
/// The per-event pipeline itself is total over well-formed input: filtering,
/// traversal, classification, and batch construction cannot fail. Errors only
/// arise when compiling the configured pattern at plugin construction, or
/// when the live-update transport rejects a send.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured file pattern is not a valid regular expression.
    #[error("invalid hot-update pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern string as configured.
        pattern: String,
        /// The underlying regex compile error.
        #[source]
        source: regex::Error,
    },

    /// The live-update transport failed to deliver a message.
    #[error("transport send failed: {0}")]
    Transport(#[from] std::io::Error),
}

/// Result type for rekindle operations
pub type Result<T> = std::result::Result<T, Error>;
