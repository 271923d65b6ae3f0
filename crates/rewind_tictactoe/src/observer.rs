//! Change notification for the history store.
//!
//! A presentation layer registers an observer and redraws whenever the
//! store reports a successful mutation.

use super::action::Move;
use super::view::SortOrder;
use tracing::trace;

/// Notification sent after a mutating call succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A move was played and became the new tip.
    Played {
        /// History index of the new entry.
        move_number: usize,
        /// The move itself.
        action: Move,
        /// Number of entries dropped from the discarded branch.
        discarded: usize,
    },
    /// The cursor moved to an existing entry.
    Jumped {
        /// New cursor.
        cursor: usize,
    },
    /// History was cleared back to the empty board.
    Reset,
    /// The move list order changed.
    SortToggled(SortOrder),
}

/// Receiver of history events.
pub trait HistoryObserver {
    /// Called once per successful mutation.
    fn on_event(&mut self, event: &HistoryEvent);
}

impl<F> HistoryObserver for F
where
    F: FnMut(&HistoryEvent),
{
    fn on_event(&mut self, event: &HistoryEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn HistoryObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn HistoryObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &HistoryEvent) {
        trace!(?event, observers = self.entries.len(), "Notifying observers");
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
