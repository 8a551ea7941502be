//! # Verify Subcommand
//!
//! Recomputes the digest of the input text and compares it with an
//! expected digest. Exits 0 on a match and 1 on a mismatch.

use anyhow::{Context, Result};
use clap::Args;

use textsha_core::{Sha256Digest, TextEncoding};
use textsha_crypto::DigestEngine;

use crate::config::CliConfig;
use crate::input::InputArgs;

/// Arguments for the `textsha verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Expected SHA-256 digest (64 hex characters).
    #[arg(long, value_name = "HEX")]
    pub expected: String,

    /// Text encoding: `code-units` (default, legacy-compatible) or `utf-8`.
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<TextEncoding>,
}

/// Outcome of one verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The digest matched.
    Match(Sha256Digest),
    /// The digest differed; carries the actual value.
    Mismatch {
        /// Digest the caller expected.
        expected: Sha256Digest,
        /// Digest the text actually hashes to.
        actual: Sha256Digest,
    },
}

/// Compare the digest of `text` with `expected_hex`.
pub fn verify_text(text: &str, expected_hex: &str, engine: &DigestEngine) -> Result<VerifyOutcome> {
    let expected = Sha256Digest::from_hex(expected_hex).context("invalid --expected digest")?;
    let actual = engine.try_digest(text).context("failed to hash input")?;
    if actual == expected {
        Ok(VerifyOutcome::Match(actual))
    } else {
        Ok(VerifyOutcome::Mismatch { expected, actual })
    }
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, config: &CliConfig) -> Result<u8> {
    let engine = config.engine(args.encoding);
    let text = args.input.read(engine.max_input_bytes())?;

    match verify_text(&text, &args.expected, &engine)? {
        VerifyOutcome::Match(digest) => {
            println!("OK: digest verified encoding={} digest={digest}", engine.encoding());
            Ok(0)
        }
        VerifyOutcome::Mismatch { expected, actual } => {
            println!(
                "FAIL: digest mismatch encoding={} expected={expected} actual={actual}",
                engine.encoding()
            );
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn matching_digest() {
        let outcome = verify_text("abc", ABC, &DigestEngine::new()).unwrap();
        assert!(matches!(outcome, VerifyOutcome::Match(_)));
    }

    #[test]
    fn uppercase_expected_digest_matches() {
        let outcome = verify_text("abc", &ABC.to_uppercase(), &DigestEngine::new()).unwrap();
        assert!(matches!(outcome, VerifyOutcome::Match(_)));
    }

    #[test]
    fn mismatch_reports_actual() {
        let outcome = verify_text("abd", ABC, &DigestEngine::new()).unwrap();
        match outcome {
            VerifyOutcome::Mismatch { expected, actual } => {
                assert_eq!(expected.to_hex(), ABC);
                assert_ne!(actual, expected);
            }
            VerifyOutcome::Match(_) => panic!("expected a mismatch"),
        }
    }

    #[test]
    fn malformed_expected_digest_is_an_error() {
        let err = verify_text("abc", "abc123", &DigestEngine::new()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --expected digest"));
    }

    #[test]
    fn signed_expected_digest_is_an_error() {
        let signed = format!("+{}", &ABC[1..]);
        let err = verify_text("abc", &signed, &DigestEngine::new()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid --expected digest"));
        assert!(msg.contains("non-hex character"));
    }

    #[test]
    fn encoding_affects_verification() {
        // "é" in code-unit mode is the single byte 0xe9.
        let latin1 = "de2e331d891ae267a7009cb45b4e8830f170e0c937288ea2731a1941c7a53b0d";
        let code_units = DigestEngine::new();
        let utf8 = DigestEngine::new().with_encoding(TextEncoding::Utf8);
        assert!(matches!(
            verify_text("\u{e9}", latin1, &code_units).unwrap(),
            VerifyOutcome::Match(_)
        ));
        assert!(matches!(
            verify_text("\u{e9}", latin1, &utf8).unwrap(),
            VerifyOutcome::Mismatch { .. }
        ));
    }
}
