//! Tic-tac-toe with snapshot history and time travel.
//!
//! The [`HistoryStore`] records every board the game passes through and a
//! cursor selecting the displayed one. Players can jump back to any earlier
//! board and play on from there, which discards the boards that followed.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{HistoryStore, PlayError, Position};
//!
//! let mut store = HistoryStore::new();
//! store.play(Position::Center)?;
//! store.play(Position::TopLeft)?;
//! assert_eq!(store.status().to_string(), "Next player: X");
//!
//! store.jump_to(1)?;
//! store.play(Position::BottomRight)?;
//! assert_eq!(store.history().len(), 3);
//!
//! assert_eq!(
//!     store.play(Position::Center),
//!     Err(PlayError::SquareOccupied(Position::Center))
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod annotate;
pub mod contracts;
mod history;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{HistoryError, Move, PlayError};
pub use annotate::{annotate, changed_position, GAME_START_LABEL};
pub use history::HistoryStore;
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use observer::{HistoryEvent, HistoryObserver, SubscriptionId};
pub use position::{Column, Coordinate, Position, Row};
pub use rules::{check_winner, is_draw, is_full, WinningLine, LINES};
pub use types::{Board, Player, Square};
pub use view::{current_move_label, GameStatus, MoveDescriptor, SortOrder};
