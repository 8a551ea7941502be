//! # textsha-cli: Command-Line Interface
//!
//! Provides the `textsha` binary, a thin adapter around the digest engine.
//!
//! ## Subcommands
//!
//! - `textsha hash`: Print the SHA-256 digest of text, a file, or stdin.
//! - `textsha verify`: Compare text against an expected digest.
//! - `textsha selftest`: Run published vectors and boundary checks.
//!
//! ```bash
//! textsha hash abc
//! textsha hash --file message.txt --encoding utf-8 --json
//! echo -n abc | textsha verify --expected ba7816bf...
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers return `anyhow::Result<u8>`; the `u8` is the process exit code.
//! - Results go to stdout, logs go to stderr.

pub mod config;
pub mod hash;
pub mod input;
pub mod selftest;
pub mod verify;

pub use config::CliConfig;
