//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the file named in the config
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub ascending: bool,
}
