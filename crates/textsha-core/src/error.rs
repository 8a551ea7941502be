//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout textsha. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Hashing itself has no failure modes for any representable text.
//!   The only digest-path errors are size-policy rejections and malformed
//!   hex digests supplied by a caller.
//! - Configuration errors carry the offending path or key in the message.

use thiserror::Error;

/// Top-level error type for textsha.
#[derive(Error, Debug)]
pub enum TextshaError {
    /// Digest computation or digest parsing failed.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error on the digest path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The encoded message is longer than the active limit allows.
    #[error("input of {units} units exceeds the limit of {limit} units")]
    InputTooLarge {
        /// Length of the encoded message, in units of the active encoding.
        units: u64,
        /// The limit that was exceeded.
        limit: u64,
    },

    /// A digest string is not 64 hexadecimal characters.
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
}
