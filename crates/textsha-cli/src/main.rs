//! # textsha CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use textsha_cli::config::CliConfig;
use textsha_cli::hash::{run_hash, HashArgs};
use textsha_cli::selftest::{run_selftest, SelftestArgs};
use textsha_cli::verify::{run_verify, VerifyArgs};

/// textsha: SHA-256 digests of text.
///
/// Hashes text from an argument, a file, or standard input and prints the
/// 64-character lowercase hex digest.
#[derive(Parser, Debug)]
#[command(name = "textsha", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of text.
    Hash(HashArgs),

    /// Check text against an expected SHA-256 digest.
    Verify(VerifyArgs),

    /// Run the built-in test vectors.
    Selftest(SelftestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("textsha CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let config =
        CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Hash(args) => run_hash(&args, &config),
        Commands::Verify(args) => run_verify(&args, &config),
        Commands::Selftest(args) => run_selftest(&args),
    }
}
