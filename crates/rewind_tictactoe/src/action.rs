//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: the player whose turn it is placing a mark.
//! The errors here cover everything the history store can reject.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when playing a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for PlayError {}

/// Error that can occur when navigating history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested history entry does not exist.
    #[display("Move index {} is out of range (history has {} entries)", index, len)]
    IndexOutOfRange {
        /// Requested entry.
        index: usize,
        /// Number of entries in history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlayError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(PlayError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            HistoryError::IndexOutOfRange { index: 4, len: 3 }.to_string(),
            "Move index 4 is out of range (history has 3 entries)"
        );
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(mv.to_string(), "O -> Bottom-left");
    }
}
