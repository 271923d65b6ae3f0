//! Move annotation: which square a history entry filled, as a (row, col) label.

use super::action::HistoryError;
use super::position::{Coordinate, Position};
use super::types::Board;
use tracing::instrument;

/// Label for history entry 0, which has no move to annotate.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Returns the square whose value differs between two consecutive boards.
///
/// Consecutive snapshots differ in exactly one square; if several differ,
/// the last one in row-major order is returned.
#[instrument(skip(prev, next))]
pub fn changed_position(prev: &Board, next: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .rev()
        .find(|pos| prev.get(*pos) != next.get(*pos))
}

/// Annotates move `move_number` (1-based) of `history` with its coordinate.
///
/// # Errors
///
/// Returns `HistoryError::IndexOutOfRange` for move 0 (the starting board)
/// and for any index past the end of history.
#[instrument(skip(history), fields(len = history.len()))]
pub fn annotate(history: &[Board], move_number: usize) -> Result<Coordinate, HistoryError> {
    let out_of_range = HistoryError::IndexOutOfRange {
        index: move_number,
        len: history.len(),
    };
    if move_number == 0 || move_number >= history.len() {
        return Err(out_of_range);
    }
    changed_position(&history[move_number - 1], &history[move_number])
        .map(Position::coordinate)
        .ok_or(out_of_range)
}
