//! First-class invariants for the history store.
//!
//! Invariants are logical properties that must hold after every mutation.
//! They are testable independently and are checked as postconditions of
//! `play` in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod cursor_in_bounds;
pub mod halts_on_win;
pub mod single_mark_per_entry;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use halts_on_win::HaltsOnWinInvariant;
pub use single_mark_per_entry::SingleMarkPerEntryInvariant;

/// All history store invariants as a composable set.
pub type HistoryInvariants = (
    CursorInBoundsInvariant,
    SingleMarkPerEntryInvariant,
    HaltsOnWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryStore, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_store() {
        let store = HistoryStore::new();
        assert!(HistoryInvariants::check_all(&store).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut store = HistoryStore::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            store.play(pos).expect("legal move");
        }
        assert!(HistoryInvariants::check_all(&store).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut store = HistoryStore::new();
        store.play(Position::Center).expect("legal move");

        // Two marks appear at once and the cursor points past the end.
        store.history.push(
            Board::new()
                .with_mark(Position::TopLeft, Player::X)
                .with_mark(Position::Center, Player::X)
                .with_mark(Position::BottomRight, Player::O),
        );
        store.cursor = 5;

        let violations = HistoryInvariants::check_all(&store).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let store = HistoryStore::new();
        type TwoInvariants = (CursorInBoundsInvariant, HaltsOnWinInvariant);
        assert!(TwoInvariants::check_all(&store).is_ok());
    }
}
