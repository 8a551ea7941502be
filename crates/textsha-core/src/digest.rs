//! # Digest Value
//!
//! `Sha256Digest` is the 32-byte result of one digest computation. It is
//! produced from a final [`HashState`] and can be parsed back from the
//! 64-character hex rendering, which is how callers hand in an expected
//! digest for verification.
//!
//! Serde represents the digest as its lowercase hex string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DigestError;
use crate::state::HashState;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a SHA-256 digest rendered as hex.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// A SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Digest {
    bytes: [u8; DIGEST_LEN],
}

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self { bytes }
    }

    /// Build the digest from a final hash state (big-endian, `H[0]` first).
    pub fn from_state(state: &HashState) -> Self {
        Self::new(state.to_be_bytes())
    }

    /// Parse a 64-character hex digest.
    ///
    /// Surrounding whitespace is ignored and uppercase digits are accepted;
    /// anything else is rejected.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim();
        if hex.len() != DIGEST_HEX_LEN {
            return Err(DigestError::InvalidHex(format!(
                "expected {DIGEST_HEX_LEN} hex chars, got {}",
                hex.len()
            )));
        }
        if let Some(pos) = hex.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(DigestError::InvalidHex(format!(
                "non-hex character at position {pos}"
            )));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &hex[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|e| {
                DigestError::InvalidHex(format!("invalid hex at position {}: {e}", i * 2))
            })?;
        }
        Ok(Self { bytes })
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Sha256Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
