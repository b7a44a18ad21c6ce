//! Error types for rs-serp-artworks.
//!
//! Only input-level failures surface here. Per-anchor mismatches are
//! absorbed by the extractors and never reach the caller.

use std::path::PathBuf;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The saved page could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being loaded.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document contained no markup at all.
    #[error("document is empty")]
    EmptyDocument,

    /// The configured site origin is not an absolute http(s) URL.
    #[error("invalid site origin: {0}")]
    InvalidOrigin(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
