//! # CLI Configuration
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults.
//! 2. A YAML file passed with `--config`.
//! 3. Per-command flags such as `--encoding`.
//!
//! ```yaml
//! encoding: utf-8
//! max_input_units: 1048576
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use textsha_core::{InputPolicy, TextEncoding, TextshaError};
use textsha_crypto::DigestEngine;

/// Default cap on the encoded input: 64 Mi units.
pub const DEFAULT_MAX_INPUT_UNITS: u64 = 64 * 1024 * 1024;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Text encoding used when a command does not pass `--encoding`.
    pub encoding: TextEncoding,
    /// Largest accepted input, in units of the active encoding.
    pub max_input_units: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::default(),
            max_input_units: DEFAULT_MAX_INPUT_UNITS,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or return the defaults when no path
    /// is given. Read and parse failures are both reported as
    /// [`TextshaError::Config`] naming the path.
    pub fn load(path: Option<&Path>) -> Result<Self, TextshaError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| TextshaError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::parse(&content)
            .map_err(|e| TextshaError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            encoding = %config.encoding,
            max_input_units = config.max_input_units,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, TextshaError> {
        Self::parse(content).map_err(|e| TextshaError::Config(e.to_string()))
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Build the digest engine for a command, applying its encoding flag.
    pub fn engine(&self, encoding: Option<TextEncoding>) -> DigestEngine {
        DigestEngine::new()
            .with_encoding(encoding.unwrap_or(self.encoding))
            .with_policy(InputPolicy::with_max_units(self.max_input_units))
    }
}
