//! Snapshot invariant: each entry adds exactly one mark, alternating X and O.

use super::super::{HistoryStore, Player, Square};
use super::Invariant;

/// Invariant: entry 0 is empty, and entry `m` differs from entry `m - 1`
/// in exactly one square, which went from empty to the mark of move `m`.
///
/// Together these imply that squares are never cleared or overwritten and
/// that X and O alternate starting with X.
pub struct SingleMarkPerEntryInvariant;

impl Invariant<HistoryStore> for SingleMarkPerEntryInvariant {
    fn holds(store: &HistoryStore) -> bool {
        let history = &store.history;

        if let Some(first) = history.first()
            && first.occupied_count() != 0
        {
            return false;
        }

        history.windows(2).enumerate().all(|(i, pair)| {
            let expected = Square::Occupied(Player::for_move(i + 1));
            let mut changes = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after);

            matches!(
                (changes.next(), changes.next()),
                (Some((Square::Empty, after)), None) if *after == expected
            )
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player on turn"
    }
}
