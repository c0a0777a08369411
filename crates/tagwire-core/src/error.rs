//! Error types for the tagwire core codec.

use thiserror::Error;

/// Errors that can occur while converting between representations.
///
/// Every failure is terminal for the line that produced it; callers decide
/// whether to abort the whole stream (the CLI does).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The JSON input has the wrong shape (missing keys, wrong value types,
    /// extra members).
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// A type tag (name or ordinal) does not resolve to any alternative.
    #[error("unknown variant type: {0}")]
    UnknownVariantType(String),

    /// The recursion ceiling was hit while unpacking a tagged value.
    #[error("recursion depth {depth} exceeds limit {limit}")]
    DepthExceeded { depth: u32, limit: u32 },

    /// The leading multibase character denotes no known base.
    #[error("invalid multibase prefix {0:?}")]
    InvalidBase(char),

    /// The multibase payload contains characters outside the selected
    /// alphabet.
    #[error("invalid character for base {base:?}: {reason}")]
    InvalidCharacter { base: char, reason: String },

    /// Binary decoding ran out of bytes before a field was complete.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    /// A field's bytes are inconsistent with its declared schema.
    #[error("invalid field: {0}")]
    InvalidField(String),
}
