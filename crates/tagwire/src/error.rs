//! Error types for the stream driver and CLI.

use tagwire_core::CodecError;
use thiserror::Error;

/// Errors that terminate the stream filter.
///
/// There is no per-line recovery: the first failure propagates out of the
/// driver loop and ends the process with a diagnostic.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Conflicting or invalid command-line options.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Codec failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An input line was not a JSON document.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;
