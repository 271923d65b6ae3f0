//! Application state and logic.

use crate::config::Palette;
use crate::input::{move_cursor, Command, Focus};
use rewind_tictactoe::{HistoryEvent, HistoryStore, MoveDescriptor, Position, SortOrder};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Main application state.
///
/// Owns the history store and the presentation-only state around it
/// (board cursor, move-list selection, focus, last error).
pub struct App {
    store: HistoryStore,
    board_cursor: Position,
    selected_move: usize,
    focus: Focus,
    error_message: Option<String>,
    needs_redraw: Rc<Cell<bool>>,
    should_quit: bool,
    palette: Palette,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_order: SortOrder, palette: Palette) -> Self {
        let mut store = HistoryStore::with_sort_order(sort_order);
        let needs_redraw = Rc::new(Cell::new(true));

        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |event: &HistoryEvent| {
            debug!(?event, "History changed, scheduling redraw");
            flag.set(true);
        });

        Self {
            store,
            board_cursor: Position::Center,
            selected_move: 0,
            focus: Focus::default(),
            error_message: None,
            needs_redraw,
            should_quit: false,
            palette,
        }
    }

    /// Gets the history store.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Gets the board cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// History index highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the configured colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true and clears the flag if the screen is stale.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Forces the next `take_redraw` to return true (e.g. after a resize).
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Gets the status line: the last rejected action, or the game status.
    pub fn status_message(&self) -> String {
        match &self.error_message {
            Some(message) => message.clone(),
            None => self.store.status().to_string(),
        }
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        self.store.move_list()
    }

    /// Position of the selected entry within the displayed move list.
    pub fn selected_row(&self) -> usize {
        self.move_list()
            .iter()
            .position(|m| m.move_number == self.selected_move)
            .unwrap_or(0)
    }

    /// Applies a command to the store or the presentation state.
    pub fn handle_command(&mut self, command: Command) {
        debug!(?command, "Handling command");
        let had_error = self.error_message.take().is_some();

        match command {
            Command::Play(position) => self.play(position),
            Command::PlayAtCursor => self.play(self.board_cursor),
            Command::MoveCursor(key) => {
                self.board_cursor = move_cursor(self.board_cursor, key);
                self.request_redraw();
            }
            Command::SelectPrevious => self.step_selection(-1),
            Command::SelectNext => self.step_selection(1),
            Command::JumpToSelected => match self.store.jump_to(self.selected_move) {
                Ok(()) => info!(cursor = self.selected_move, "Jumped"),
                Err(e) => self.reject(e.to_string()),
            },
            Command::SwitchFocus => {
                self.focus = self.focus.toggled();
                self.selected_move = self.store.cursor();
                self.request_redraw();
            }
            Command::ToggleSort => {
                self.store.toggle_sort();
            }
            Command::Reset => {
                self.store.reset();
                self.selected_move = 0;
                self.board_cursor = Position::Center;
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }

        if had_error {
            self.request_redraw();
        }
    }

    fn play(&mut self, position: Position) {
        match self.store.play(position) {
            Ok(_) => {
                self.board_cursor = position;
                self.selected_move = self.store.cursor();
            }
            Err(e) => self.reject(e.to_string()),
        }
    }

    fn step_selection(&mut self, delta: isize) {
        let moves = self.move_list();
        let row = self.selected_row() as isize + delta;
        if let Some(entry) = usize::try_from(row).ok().and_then(|r| moves.get(r)) {
            self.selected_move = entry.move_number;
            self.request_redraw();
        }
    }

    fn reject(&mut self, message: String) {
        warn!(%message, "Action rejected");
        self.error_message = Some(message);
        self.request_redraw();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default(), Palette::default())
    }
}
