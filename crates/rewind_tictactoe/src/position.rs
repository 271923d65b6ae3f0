//! Board positions and their row/column coordinates.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Row label of a board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Row {
    /// Top row.
    A,
    /// Middle row.
    B,
    /// Bottom row.
    C,
}

/// Column label of a board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Column {
    /// Left column.
    #[display("1")]
    One,
    /// Middle column.
    #[display("2")]
    Two,
    /// Right column.
    #[display("3")]
    Three,
}

/// Human-facing (row, col) label for a position, e.g. `B2` for the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("[row:{}|col:{}]", row, col)]
pub struct Coordinate {
    /// Row label (A-C).
    pub row: Row,
    /// Column label (1-3).
    pub col: Column,
}

impl Coordinate {
    /// The board position this label names.
    pub fn position(self) -> Position {
        Position::ALL[self.row as usize * 3 + self.col as usize]
    }
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based row (index / 3).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column (index % 3).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns the (row, col) label for this position.
    pub fn coordinate(self) -> Coordinate {
        let row = match self.row() {
            0 => Row::A,
            1 => Row::B,
            _ => Row::C,
        };
        let col = match self.col() {
            0 => Column::One,
            1 => Column::Two,
            _ => Column::Three,
        };
        Coordinate { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
