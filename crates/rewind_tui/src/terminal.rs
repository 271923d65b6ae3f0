//! Terminal setup and the event loop.

use crate::app::App;
use crate::input::command_for;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Takes over the terminal, runs the game until the user quits, and restores it.
pub fn run(app: &mut App, tick_rate: Duration) -> Result<()> {
    info!("Starting rewind TUI");

    let mut terminal = init_terminal()?;
    let res = event_loop(&mut terminal, app, tick_rate);
    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res?;
    Ok(restored?)
}

/// Enables raw mode and the alternate screen.
///
/// If any step after raw mode fails, the terminal is put back before the
/// error is returned.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    setup_or_rollback(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let mut stdout = io::stdout();
            let _ = execute!(stdout, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Runs `setup`, calling `rollback` once if it fails.
fn setup_or_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|err| {
        warn!(error = %err, "Terminal setup failed, restoring");
        rollback();
    })
}

/// Leaves the alternate screen and raw mode, attempting every step.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

/// Redraws when the app is stale and feeds key presses to it.
#[instrument(skip_all, fields(tick_ms = tick_rate.as_millis() as u64))]
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while !app.should_quit() {
        if app.take_redraw() {
            terminal.draw(|f| ui::draw(f, app))?;
        }

        if !event::poll(tick_rate)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = command_for(key.code, app.focus()) {
                    app.handle_command(command);
                }
            }
            Event::Resize(_, _) => app.request_redraw(),
            _ => {}
        }
    }

    info!("Event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_rolls_back() {
        let rolled_back = Cell::new(0);
        let res: io::Result<()> = setup_or_rollback(
            || Err(io::Error::other("no tty")),
            || rolled_back.set(rolled_back.get() + 1),
        );
        assert!(res.is_err());
        assert_eq!(rolled_back.get(), 1);
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let rolled_back = Cell::new(false);
        let res = setup_or_rollback(|| Ok(7), || rolled_back.set(true));
        assert_eq!(res.expect("setup succeeds"), 7);
        assert!(!rolled_back.get());
    }
}
