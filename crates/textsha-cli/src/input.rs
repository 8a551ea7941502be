//! # Input Selection
//!
//! Every hashing command takes its text from exactly one place: a
//! positional argument, a `--file`, or standard input.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

/// Where the text to hash comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to hash. Standard input is read when neither TEXT nor --file
    /// is given.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a UTF-8 file. The content is hashed as-is,
    /// including any trailing newline.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the text, falling back to the process's standard input.
    ///
    /// Files and standard input larger than `max_bytes` are rejected
    /// without being read in full.
    pub fn read(&self, max_bytes: u64) -> Result<String> {
        self.read_from(std::io::stdin().lock(), max_bytes)
    }

    /// Resolve the text, falling back to `stdin`.
    pub fn read_from(&self, stdin: impl Read, max_bytes: u64) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            tracing::debug!(path = %path.display(), max_bytes, "reading input file");
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to read input file: {}", path.display()))?;
            let len = file
                .metadata()
                .with_context(|| format!("failed to read input file: {}", path.display()))?
                .len();
            if len > max_bytes {
                bail!(
                    "input file {} is {len} bytes, larger than the {max_bytes} bytes the input limit allows",
                    path.display()
                );
            }
            return read_bounded(file, max_bytes)
                .with_context(|| format!("failed to read input file: {}", path.display()));
        }
        tracing::debug!(max_bytes, "reading input from stdin");
        read_bounded(stdin, max_bytes).context("failed to read standard input")
    }
}

/// Read at most `max_bytes` of UTF-8 text from `reader`.
fn read_bounded(reader: impl Read, max_bytes: u64) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_bytes {
        bail!("input is larger than the {max_bytes} bytes the input limit allows");
    }
    String::from_utf8(bytes).context("input is not valid UTF-8")
}
