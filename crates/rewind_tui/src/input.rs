//! Key bindings: translate key presses into app commands.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at a specific square.
    Play(Position),
    /// Play at the board cursor.
    PlayAtCursor,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Select the previous move-list entry.
    SelectPrevious,
    /// Select the next move-list entry.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Start over.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key to a command given the focused pane.
pub fn command_for(key: KeyCode, focus: Focus) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('s') => Some(Command::ToggleSort),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Some(match focus {
            Focus::Board => Command::PlayAtCursor,
            Focus::Moves => Command::JumpToSelected,
        }),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(match (focus, key) {
            (Focus::Moves, KeyCode::Up) => Command::SelectPrevious,
            (Focus::Moves, KeyCode::Down) => Command::SelectNext,
            _ => Command::MoveCursor(key),
        }),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
