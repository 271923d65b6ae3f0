//! Read-only projections of the history store for a presentation layer.

use super::annotate::GAME_START_LABEL;
use super::position::Coordinate;
use super::rules::WinningLine;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Order in which the move list is presented.
///
/// `Descending` lists entries in creation order (game start first);
/// `Ascending` lists them newest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Descending,
    /// Latest move first.
    Ascending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
        }
    }

    /// Label for a sort toggle control.
    pub fn button_label(self) -> String {
        format!("Moves Sorted {}", self)
    }
}

/// Status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet and empty squares remain.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// Someone has three in a row.
    Won(WinningLine),
    /// Board full without a winner.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(line) => write!(f, "Winner: {}", line.player),
            GameStatus::Draw => write!(f, "Game is a draw"),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    pub move_number: usize,
    /// Player and coordinate of the move; `None` for the game start.
    pub annotation: Option<(Player, Coordinate)>,
    /// True when this entry is the one currently displayed.
    pub is_current: bool,
}

impl MoveDescriptor {
    /// Text shown for this entry.
    pub fn label(&self) -> String {
        match self.annotation {
            None => GAME_START_LABEL.to_string(),
            Some((player, coordinate)) => {
                format!("Move #{}: {} {}", self.move_number, player, coordinate)
            }
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Indicator for the displayed entry, present once a move has been made.
pub fn current_move_label(cursor: usize) -> Option<String> {
    (cursor > 0).then(|| format!("you are at move #{}", cursor))
}
