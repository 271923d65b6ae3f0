//! Contract-based validation for history mutations.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(store, action)} action {Q(store)}.

use super::action::PlayError;
use super::history::HistoryStore;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::check_winner;
use super::Position;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlayError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), PlayError>;
}

/// Precondition: the displayed board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won board.
    #[instrument(skip(store))]
    pub fn check(store: &HistoryStore) -> Result<(), PlayError> {
        match check_winner(store.current_board()) {
            Some(_) => Err(PlayError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty on the displayed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(store))]
    pub fn check(store: &HistoryStore, position: Position) -> Result<(), PlayError> {
        if store.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(PlayError::SquareOccupied(position))
        }
    }
}

/// Composite precondition: a move is legal if the game is open and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(store))]
    pub fn check(store: &HistoryStore, position: Position) -> Result<(), PlayError> {
        GameNotOver::check(store)?;
        SquareIsEmpty::check(store, position)?;
        Ok(())
    }
}

/// Contract for `HistoryStore::play`.
///
/// Preconditions:
/// - Displayed board has no winner
/// - Target square is empty
///
/// Postconditions:
/// - All [`HistoryInvariants`] hold
/// - The cursor sits on the tip
pub struct PlayContract;

impl Contract<HistoryStore, Position> for PlayContract {
    fn pre(store: &HistoryStore, position: &Position) -> Result<(), PlayError> {
        LegalMove::check(store, *position)
    }

    fn post(after: &HistoryStore) -> Result<(), PlayError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            PlayError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !after.is_at_tip() {
            return Err(PlayError::InvariantViolation(
                "Postcondition failed: cursor is not at the tip after a move".to_string(),
            ));
        }
        Ok(())
    }
}
