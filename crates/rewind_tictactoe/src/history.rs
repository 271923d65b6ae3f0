//! Snapshot history with time travel.
//!
//! The store keeps every board the game has passed through, a cursor
//! selecting the displayed board, and the move-list sort order. Playing
//! from an earlier entry discards the entries after it.

use super::action::{HistoryError, Move, PlayError};
use super::annotate::annotate;
use super::contracts::{Contract, PlayContract};
use super::observer::{HistoryEvent, HistoryObserver, Observers, SubscriptionId};
use super::rules::{check_winner, is_draw, WinningLine};
use super::types::{Board, Player};
use super::view::{current_move_label, GameStatus, MoveDescriptor, SortOrder};
use super::Position;
use tracing::{debug, info, instrument, warn};

/// Board snapshots, a cursor into them, and the move-list order.
#[derive(Debug)]
pub struct HistoryStore {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
    pub(crate) sort_order: SortOrder,
    observers: Observers,
}

impl HistoryStore {
    /// Creates a store holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a store whose move list starts in the given order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            sort_order,
            observers: Observers::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────────

    /// Plays the current player's mark at `position`.
    ///
    /// The new board replaces everything after the cursor and becomes the tip.
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver` if the displayed board already has a winner.
    /// - `PlayError::SquareOccupied` if the square is taken.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn play(&mut self, position: Position) -> Result<&Board, PlayError> {
        if let Err(e) = PlayContract::pre(self, &position) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = (self.history.clone(), self.cursor);

        let action = Move::new(self.to_move(), position);
        let next = self.current_board().with_mark(position, action.player);

        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(self) {
            warn!(error = %e, "Postcondition failed after move, rolling back");
            (self.history, self.cursor) = before;
            return Err(e);
        }

        if discarded > 0 {
            debug!(discarded, "Discarded future branch");
        }
        info!(move_number = self.cursor, %action, "Move played");

        self.observers.notify(&HistoryEvent::Played {
            move_number: self.cursor,
            action,
            discarded,
        });
        Ok(self.current_board())
    }

    /// Plays at a raw board index (0-8, row-major).
    ///
    /// # Errors
    ///
    /// Returns `PlayError::OutOfBounds` for indices above 8, otherwise
    /// the errors of [`HistoryStore::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<&Board, PlayError> {
        let position = Position::from_index(index).ok_or(PlayError::OutOfBounds(index))?;
        self.play(position)
    }

    /// Moves the cursor to history entry `move_number`.
    ///
    /// History itself is untouched.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::IndexOutOfRange` if the entry does not exist.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        if move_number >= self.history.len() {
            warn!("Jump target out of range");
            return Err(HistoryError::IndexOutOfRange {
                index: move_number,
                len: self.history.len(),
            });
        }

        self.cursor = move_number;
        debug!(cursor = self.cursor, "Cursor moved");
        self.observers.notify(&HistoryEvent::Jumped {
            cursor: self.cursor,
        });
        Ok(())
    }

    /// Clears history back to the empty board and restores the default order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.cursor = 0;
        self.sort_order = SortOrder::default();
        info!("History reset");
        self.observers.notify(&HistoryEvent::Reset);
    }

    /// Flips the move-list sort order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
        self.observers.notify(&HistoryEvent::SortToggled(self.sort_order));
        self.sort_order
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Registers an observer called after every successful mutation.
    pub fn subscribe(&mut self, observer: impl HistoryObserver + 'static) -> SubscriptionId {
        let id = self.observers.subscribe(Box::new(observer));
        debug!(%id, "Observer subscribed");
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ─────────────────────────────────────────────────────────────
    //  Projections
    // ─────────────────────────────────────────────────────────────

    /// All snapshots, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the most recent snapshot.
    pub fn tip(&self) -> usize {
        self.history.len() - 1
    }

    /// True when the cursor sits on the most recent snapshot.
    pub fn is_at_tip(&self) -> bool {
        self.cursor == self.tip()
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Player whose mark the next `play` places.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner(self.current_board())
    }

    /// Status of the displayed board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = check_winner(board) {
            GameStatus::Won(line)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// The move that produced entry `move_number`, or `None` for entry 0.
    pub fn move_at(&self, move_number: usize) -> Option<Move> {
        annotate(&self.history, move_number)
            .ok()
            .map(|coordinate| Move::new(Player::for_move(move_number), coordinate.position()))
    }

    /// Move list in the current sort order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        let mut moves: Vec<MoveDescriptor> = (0..self.history.len())
            .map(|move_number| MoveDescriptor {
                move_number,
                annotation: annotate(&self.history, move_number)
                    .ok()
                    .map(|coordinate| (Player::for_move(move_number), coordinate)),
                is_current: move_number == self.cursor,
            })
            .collect();

        if self.sort_order == SortOrder::Ascending {
            moves.reverse();
        }
        moves
    }

    /// "you are at move #N" for the displayed entry, absent at game start.
    pub fn current_move_label(&self) -> Option<String> {
        current_move_label(self.cursor)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn play_all(store: &mut HistoryStore, indices: &[usize]) {
        for &idx in indices {
            store.play_index(idx).expect("legal move");
        }
    }

    #[test]
    fn test_new_store() {
        let store = HistoryStore::new();
        assert_eq!(store.history(), &[Board::new()]);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.sort_order(), SortOrder::Descending);
        assert_eq!(store.to_move(), Player::X);
        assert_eq!(store.current_move_label(), None);
    }

    #[test]
    fn test_play_advances_cursor() {
        let mut store = HistoryStore::new();
        let board = *store.play(Position::TopLeft).expect("legal move");
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.status().to_string(), "Next player: O");

        store.play(Position::Center).expect("legal move");
        assert_eq!(
            store.current_board().get(Position::Center),
            Square::Occupied(Player::O)
        );
        assert_eq!(store.history().len(), 3);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut store = HistoryStore::new();
        store.play(Position::Center).expect("legal move");
        let before = store.history().to_vec();

        assert_eq!(
            store.play(Position::Center),
            Err(PlayError::SquareOccupied(Position::Center))
        );
        assert_eq!(store.history(), before.as_slice());
        assert_eq!(store.cursor(), 1);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut store = HistoryStore::new();
        assert_eq!(store.play_index(9), Err(PlayError::OutOfBounds(9)));
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_win_stops_play() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 4, 3, 1, 6]);

        let line = store.winning_line().expect("X wins");
        assert_eq!(line.player, Player::X);
        assert_eq!(
            line.positions,
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        );
        assert_eq!(store.status().to_string(), "Winner: X");
        assert_eq!(store.play_index(2), Err(PlayError::GameOver));
        assert_eq!(store.history().len(), 6);
    }

    #[test]
    fn test_status_on_full_board() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(store.status(), GameStatus::Draw);

        // Last move fills the board and completes the right column.
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 1, 2, 3, 5, 4, 7, 6, 8]);
        assert_eq!(store.current_board().occupied_count(), 9);
        assert_eq!(store.status().winner(), Some(Player::X));
        assert_eq!(store.status().to_string(), "Winner: X");
    }

    #[test]
    fn test_move_list_matches_annotator() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[5, 0, 7]);

        for entry in store.move_list() {
            let expected = annotate(store.history(), entry.move_number).ok();
            assert_eq!(entry.annotation.map(|(_, coordinate)| coordinate), expected);
        }
        let third = store.move_at(3).expect("move 3 exists");
        assert_eq!(third.player, Player::X);
        assert_eq!(third.position, Position::BottomCenter);
    }

    #[test]
    fn test_jump_back_and_play_discards_branch() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 4, 8]);
        store.jump_to(1).expect("valid entry");
        assert_eq!(store.to_move(), Player::O);

        store.play_index(5).expect("legal move");
        assert_eq!(store.history().len(), 3);
        assert_eq!(store.cursor(), 2);
        assert!(store.current_board().is_empty(Position::Center));
        assert_eq!(
            store.current_board().get(Position::MiddleRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_to_past_a_win_allows_play() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 4, 3, 1, 6]);
        store.jump_to(4).expect("valid entry");
        assert!(store.winning_line().is_none());
        store.play_index(2).expect("board at move 4 is still open");
        assert_eq!(store.history().len(), 6);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut store = HistoryStore::new();
        assert_eq!(
            store.jump_to(1),
            Err(HistoryError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 1, 2]);
        store.toggle_sort();
        store.jump_to(1).expect("valid entry");

        store.reset();
        assert_eq!(store.history(), &[Board::new()]);
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_move_list_order() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 4]);

        let labels: Vec<String> = store.move_list().iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Move #1: X [row:A|col:1]",
                "Move #2: O [row:B|col:2]",
            ]
        );

        store.toggle_sort();
        let numbers: Vec<usize> = store.move_list().iter().map(|m| m.move_number).collect();
        assert_eq!(numbers, vec![2, 1, 0]);
    }

    #[test]
    fn test_current_marker_follows_cursor() {
        let mut store = HistoryStore::new();
        play_all(&mut store, &[0, 4, 8]);
        store.jump_to(1).expect("valid entry");

        let current: Vec<usize> = store
            .move_list()
            .iter()
            .filter(|m| m.is_current)
            .map(|m| m.move_number)
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(store.current_move_label().as_deref(), Some("you are at move #1"));
        assert!(!store.is_at_tip());
    }

    #[test]
    fn test_observers_see_successful_mutations_only() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = HistoryStore::new();
        let sink = Rc::clone(&events);
        let id = store.subscribe(move |event: &HistoryEvent| sink.borrow_mut().push(*event));
        assert_eq!(store.observer_count(), 1);

        store.play(Position::Center).expect("legal move");
        let _ = store.play(Position::Center);
        let _ = store.jump_to(7);
        store.jump_to(0).expect("valid entry");
        store.toggle_sort();
        store.reset();

        assert_eq!(
            *events.borrow(),
            vec![
                HistoryEvent::Played {
                    move_number: 1,
                    action: Move::new(Player::X, Position::Center),
                    discarded: 0,
                },
                HistoryEvent::Jumped { cursor: 0 },
                HistoryEvent::SortToggled(SortOrder::Ascending),
                HistoryEvent::Reset,
            ]
        );

        assert!(store.unsubscribe(id));
        store.toggle_sort();
        assert_eq!(events.borrow().len(), 4);
    }
}
