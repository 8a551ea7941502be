//! # Selftest Subcommand
//!
//! Runs the engine against the published SHA-256 vectors, a sweep of
//! block-boundary lengths, and a set of Unicode samples. Boundary and
//! Unicode checks compare against the `sha2` crate.

use anyhow::Result;
use clap::Args;
use sha2::{Digest, Sha256};

use textsha_core::TextEncoding;
use textsha_crypto::DigestEngine;

/// Published vectors: (label, input, expected digest).
const PUBLISHED_VECTORS: &[(&str, &str, &str)] = &[
    (
        "empty",
        "",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    ),
    (
        "abc",
        "abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    ),
    (
        "448-bit",
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    ),
    (
        "896-bit",
        "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    ),
];

/// Message lengths around the one- and two-block padding boundaries.
const BOUNDARY_LENGTHS: &[usize] = &[0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 128, 200];

const UNICODE_SAMPLES: &[&str] = &[
    "caf\u{e9}",
    "\u{20ac}100",
    "\u{65e5}\u{672c}\u{8a9e}",
    "\u{1f600} smile",
];

/// Arguments for the `textsha selftest` subcommand.
#[derive(Args, Debug, Default)]
pub struct SelftestArgs {
    /// Print only failures and the summary line.
    #[arg(long)]
    pub quiet: bool,
}

/// One self-test check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Human-readable check name.
    pub name: String,
    /// Expected hex digest.
    pub expected: String,
    /// Hex digest the engine produced.
    pub actual: String,
}

impl CheckResult {
    /// Whether the engine agreed with the expectation.
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

fn reference_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes).iter().map(|b| format!("{b:02x}")).collect()
}

/// Run every check and collect the results.
pub fn run_checks() -> Result<Vec<CheckResult>> {
    let mut results = Vec::new();

    for (label, input, expected) in PUBLISHED_VECTORS {
        for encoding in TextEncoding::ALL {
            let engine = DigestEngine::new().with_encoding(encoding);
            results.push(CheckResult {
                name: format!("vector {label} ({encoding})"),
                expected: (*expected).to_string(),
                actual: engine.digest_hex(input)?,
            });
        }
    }

    for &len in BOUNDARY_LENGTHS {
        let text: String = (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let expected = reference_hex(text.as_bytes());
        for encoding in TextEncoding::ALL {
            let engine = DigestEngine::new().with_encoding(encoding);
            results.push(CheckResult {
                name: format!("boundary length {len} ({encoding})"),
                expected: expected.clone(),
                actual: engine.digest_hex(&text)?,
            });
        }
    }

    let utf8 = DigestEngine::new().with_encoding(TextEncoding::Utf8);
    for sample in UNICODE_SAMPLES {
        results.push(CheckResult {
            name: format!("unicode {sample:?} (utf-8)"),
            expected: reference_hex(sample.as_bytes()),
            actual: utf8.digest_hex(sample)?,
        });
    }

    Ok(results)
}

/// Execute the selftest subcommand.
pub fn run_selftest(args: &SelftestArgs) -> Result<u8> {
    let results = run_checks()?;
    let failed = results.iter().filter(|r| !r.passed()).count();

    for result in &results {
        if result.passed() {
            tracing::debug!(check = %result.name, "passed");
            if !args.quiet {
                println!("OK: {}", result.name);
            }
        } else {
            println!(
                "FAIL: {} expected={} actual={}",
                result.name, result.expected, result.actual
            );
        }
    }

    println!(
        "{} checks, {} passed, {} failed",
        results.len(),
        results.len() - failed,
        failed
    );

    if failed == 0 {
        Ok(0)
    } else {
        tracing::error!(failed, "selftest failed");
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_passes() {
        let results = run_checks().unwrap();
        let failures: Vec<_> = results.iter().filter(|r| !r.passed()).collect();
        assert!(failures.is_empty(), "failing checks: {failures:?}");
    }

    #[test]
    fn covers_all_groups() {
        let results = run_checks().unwrap();
        let expected_count = PUBLISHED_VECTORS.len() * 2
            + BOUNDARY_LENGTHS.len() * 2
            + UNICODE_SAMPLES.len();
        assert_eq!(results.len(), expected_count);
        assert!(results.iter().any(|r| r.name == "boundary length 56 (code-units)"));
    }

    #[test]
    fn failed_check_is_detected() {
        let check = CheckResult {
            name: "x".to_string(),
            expected: "00".to_string(),
            actual: "01".to_string(),
        };
        assert!(!check.passed());
    }

    #[test]
    fn run_selftest_succeeds() {
        assert_eq!(run_selftest(&SelftestArgs { quiet: true }).unwrap(), 0);
    }
}
