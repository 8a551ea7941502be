//! # Hash Subcommand
//!
//! Prints the SHA-256 digest of the input text, either as the bare hex
//! string or as a JSON report.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use textsha_core::{Sha256Digest, TextEncoding};
use textsha_crypto::DigestEngine;

use crate::config::CliConfig;
use crate::input::InputArgs;

/// Arguments for the `textsha hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Text encoding: `code-units` (default, legacy-compatible) or `utf-8`.
    #[arg(long, value_name = "ENCODING")]
    pub encoding: Option<TextEncoding>,

    /// Print a JSON object instead of the bare digest.
    #[arg(long)]
    pub json: bool,
}

/// Result of hashing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashReport {
    /// The digest.
    pub digest: Sha256Digest,
    /// Encoding the text was hashed under.
    pub encoding: TextEncoding,
    /// Message length in units of that encoding.
    pub units: usize,
}

/// Hash `text` with `engine`.
pub fn hash_text(text: &str, engine: &DigestEngine) -> Result<HashReport> {
    let digest = engine.try_digest(text).context("failed to hash input")?;
    Ok(HashReport {
        digest,
        encoding: engine.encoding(),
        units: engine.message_len(text),
    })
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs, config: &CliConfig) -> Result<u8> {
    let engine = config.engine(args.encoding);
    let text = args.input.read(engine.max_input_bytes())?;
    let report = hash_text(&text, &engine)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to render JSON")?;
        println!("{json}");
    } else {
        println!("{}", report.digest);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsha_core::InputPolicy;

    #[test]
    fn report_for_abc() {
        let report = hash_text("abc", &DigestEngine::new()).unwrap();
        assert_eq!(
            report.digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(report.encoding, TextEncoding::CodeUnits);
        assert_eq!(report.units, 3);
    }

    #[test]
    fn units_follow_the_encoding() {
        let engine = DigestEngine::new().with_encoding(TextEncoding::Utf8);
        assert_eq!(hash_text("\u{20ac}", &engine).unwrap().units, 3);
        assert_eq!(hash_text("\u{20ac}", &DigestEngine::new()).unwrap().units, 1);
    }

    #[test]
    fn report_serializes_hex_and_kebab_case() {
        let report = hash_text("", &DigestEngine::new()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["digest"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(json["encoding"], "code-units");
        assert_eq!(json["units"], 0);
    }

    #[test]
    fn oversized_input_is_an_error() {
        let engine = DigestEngine::new().with_policy(InputPolicy::with_max_units(2));
        let err = hash_text("abc", &engine).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the limit"));
    }
}
