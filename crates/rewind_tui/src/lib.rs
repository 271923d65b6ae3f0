//! Terminal UI for rewind_tictactoe.
//!
//! The [`App`] owns a [`rewind_tictactoe::HistoryStore`], translates key
//! presses into store calls, and redraws whenever the store reports a change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, Palette, Theme, TuiConfig};
pub use input::{command_for, move_cursor, Command, Focus};
pub use logging::init_tracing;
pub use terminal::run;
