//! # SHA-256 Digest Engine
//!
//! Wires the stages together: encode, pad, compress every block into a
//! fresh state, format. Each call owns all of its working buffers, so the
//! functions here are reentrant and safe to call from any thread.
//!
//! [`digest`] is the plain text-to-hex operation. [`DigestEngine`] adds an
//! explicit encoding, an input-size policy, and typed results.

use textsha_core::{DigestError, HashState, InputPolicy, Sha256Digest, TextEncoding};

use crate::compress::compress;
use crate::constants::{initial_state, BLOCK_LEN};
use crate::encode::{encode, encoded_len, Unit};
use crate::format::{format_hex, to_digest};
use crate::pad::pad;

/// Compute the SHA-256 digest of `text` as 64 lowercase hex characters.
///
/// Uses the default [`TextEncoding::CodeUnits`] encoding, so ASCII input
/// hashes exactly like standard SHA-256 and non-ASCII input reproduces the
/// legacy code-unit digests.
///
/// ```
/// assert_eq!(
///     textsha_crypto::digest("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn digest(text: &str) -> String {
    digest_with(text, TextEncoding::default())
}

/// Compute the hex digest of `text` under an explicit encoding.
pub fn digest_with(text: &str, encoding: TextEncoding) -> String {
    format_hex(&hash_units(&encode(text, encoding)))
}

/// Run padding and compression over an encoded message.
fn hash_units(units: &[Unit]) -> HashState {
    let padded = pad(units);
    let mut state = initial_state();
    let mut block: [Unit; BLOCK_LEN] = [0; BLOCK_LEN];
    for chunk in padded.chunks_exact(BLOCK_LEN) {
        block.copy_from_slice(chunk);
        compress(&mut state, &block);
    }
    state
}

/// A configured digest engine.
///
/// Cheap to copy and free of interior state; one engine can serve any
/// number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestEngine {
    encoding: TextEncoding,
    policy: InputPolicy,
}

impl DigestEngine {
    /// Engine with the default encoding and no limit beyond the length field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `encoding` for every digest.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Apply `policy` to every digest.
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured encoding.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// The configured input policy.
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Length of `text` in units of the configured encoding.
    pub fn message_len(&self, text: &str) -> usize {
        encoded_len(text, self.encoding)
    }

    /// Upper bound on the UTF-8 size of any text the policy accepts.
    ///
    /// Readers can stop once input grows past this many bytes. A UTF-16
    /// code unit never takes more than three UTF-8 bytes.
    pub fn max_input_bytes(&self) -> u64 {
        match self.encoding {
            TextEncoding::CodeUnits => self.policy.max_units().saturating_mul(3),
            TextEncoding::Utf8 => self.policy.max_units(),
        }
    }

    /// Compute the digest of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InputTooLarge`] when the encoded message is
    /// longer than the policy allows. The length is checked before the
    /// text is encoded, so nothing is allocated or hashed in that case.
    pub fn try_digest(&self, text: &str) -> Result<Sha256Digest, DigestError> {
        self.policy.check(self.message_len(text))?;
        let units = encode(text, self.encoding);

        if !self.encoding.is_lossless_for(text) {
            tracing::debug!(
                encoding = %self.encoding,
                "hashing non-ASCII text as raw code units; digest differs from UTF-8 SHA-256"
            );
        }
        tracing::debug!(
            encoding = %self.encoding,
            units = units.len(),
            blocks = crate::pad::padded_len(units.len()) / BLOCK_LEN,
            "computing digest"
        );

        Ok(to_digest(&hash_units(&units)))
    }

    /// Compute the digest of `text` as lowercase hex.
    pub fn digest_hex(&self, text: &str) -> Result<String, DigestError> {
        self.try_digest(text).map(|d| d.to_hex())
    }

    /// Whether `text` hashes to `expected`.
    pub fn verify(&self, text: &str, expected: &Sha256Digest) -> Result<bool, DigestError> {
        let actual = self.try_digest(text)?;
        let matched = actual == *expected;
        tracing::debug!(%actual, %expected, matched, "verified digest");
        Ok(matched)
    }
}
