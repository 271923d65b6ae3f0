//! Terminal invariant: nothing follows a won board.

use super::super::rules::check_winner;
use super::super::HistoryStore;
use super::Invariant;

/// Invariant: only the tip may hold a winning line.
pub struct HaltsOnWinInvariant;

impl Invariant<HistoryStore> for HaltsOnWinInvariant {
    fn holds(store: &HistoryStore) -> bool {
        let before_tip = store.history.len().saturating_sub(1);
        store.history[..before_tip]
            .iter()
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No history entry follows a won board"
    }
}
