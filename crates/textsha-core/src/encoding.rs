//! # Text Encodings
//!
//! Selects how input text becomes the unit sequence that is padded and
//! compressed.
//!
//! ## Compatibility
//!
//! [`TextEncoding::CodeUnits`] is the default. It feeds each UTF-16 code
//! unit into the hash verbatim, which reproduces the digests of the legacy
//! text-hashing tool bit for bit. For ASCII text it is indistinguishable
//! from standard SHA-256. For text containing code units above `0xFF` the
//! result diverges from every byte-oriented SHA-256 implementation.
//!
//! [`TextEncoding::Utf8`] hashes the UTF-8 bytes of the text and always
//! agrees with standard SHA-256. Switching a stored corpus from one mode to
//! the other changes the digest of every non-ASCII entry.

use serde::{Deserialize, Serialize};

use crate::error::TextshaError;

/// How text is turned into hash input units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// One unit per UTF-16 code unit, value used as-is (`0..=0xFFFF`).
    #[default]
    CodeUnits,
    /// One unit per UTF-8 byte.
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl TextEncoding {
    /// Every supported encoding, default first.
    pub const ALL: [TextEncoding; 2] = [TextEncoding::CodeUnits, TextEncoding::Utf8];

    /// Returns the encoding identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeUnits => "code-units",
            Self::Utf8 => "utf-8",
        }
    }

    /// Whether this encoding hashes `text` exactly as standard SHA-256 over
    /// its UTF-8 bytes would.
    ///
    /// Always true for `Utf8`. For `CodeUnits` only ASCII text qualifies.
    pub fn is_lossless_for(&self, text: &str) -> bool {
        match self {
            Self::Utf8 => true,
            Self::CodeUnits => text.is_ascii(),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = TextshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code-units" | "codeunits" | "utf-16" | "utf16" => Ok(Self::CodeUnits),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            other => Err(TextshaError::Config(format!(
                "unknown text encoding '{other}' (expected 'code-units' or 'utf-8')"
            ))),
        }
    }
}
