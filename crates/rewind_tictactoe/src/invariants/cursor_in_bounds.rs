//! Cursor invariant: the cursor always selects an existing entry.

use super::super::HistoryStore;
use super::Invariant;

/// Invariant: `0 <= cursor < history.len()`, and history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<HistoryStore> for CursorInBoundsInvariant {
    fn holds(store: &HistoryStore) -> bool {
        !store.history.is_empty() && store.cursor < store.history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}
