//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Watches the BROU dollar quote and posts significant moves to Telegram
#[derive(Parser, Debug)]
#[command(name = "dolar-bot")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands. `run` is the default.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Poll the rate board forever, notifying on significant changes
    Run,

    /// Fetch once and show what the next tick would do, without sending
    Check,
}
