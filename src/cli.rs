//! CLI module
//!
//! Argument parsing for the `duplexcrypt` binary: encrypt/decrypt files
//! given a hex key, IV, and optional associated data, plus a `keygen`
//! helper gated on the `rand` feature.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sponge-duplex authenticated encryption CLI tool
#[derive(Parser, Debug)]
#[command(name = "duplexcrypt", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt a file, appending the tag to the output
    Encrypt {
        /// 32 hex characters (16 bytes)
        #[arg(long)]
        key: String,
        /// 32 hex characters (16 bytes)
        #[arg(long)]
        iv: String,
        /// Hex-encoded associated data
        #[arg(long, default_value = "")]
        ad: String,
        input: PathBuf,
        output: PathBuf,
    },
    /// Decrypt a file and verify its trailing tag
    Decrypt {
        #[arg(long)]
        key: String,
        #[arg(long)]
        iv: String,
        #[arg(long, default_value = "")]
        ad: String,
        input: PathBuf,
        output: PathBuf,
    },
    /// Print a random key and IV as hex
    #[cfg(feature = "rand")]
    Keygen,
}
