//! Rewind - tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::SortOrder;
use rewind_tui::{init_tracing, run, App, Cli, TuiConfig};
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(config.log_file(), config.log_filter())?;
    info!(config = ?config, "Configuration resolved");

    let palette = config.theme().palette()?;
    let sort_order = if cli.ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };

    let mut app = App::new(sort_order, palette);
    run(&mut app, Duration::from_millis(*config.tick_rate_ms()))
}
