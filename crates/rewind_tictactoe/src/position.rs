//! Typed cell positions on the 3x3 board.

use crate::error::Rejection;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Serialized as its board index so view output stays compact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "usize", try_from = "usize")]
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

impl Position {
    /// All 9 positions in board order.
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
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 1-based column, counted from the left.
    pub fn column(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// 1-based row, counted from the top.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl TryFrom<usize> for Position {
    type Error = Rejection;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(Rejection::InvalidCell(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_matches_board_order() {
        for (idx, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), idx);
            assert_eq!(Position::from_index(idx), Some(pos));
        }
    }

    #[test]
    fn test_column_and_row_are_one_based() {
        assert_eq!((Position::TopLeft.column(), Position::TopLeft.row()), (1, 1));
        assert_eq!((Position::MiddleRight.column(), Position::MiddleRight.row()), (3, 2));
        assert_eq!((Position::BottomCenter.column(), Position::BottomCenter.row()), (2, 3));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::try_from(12), Err(Rejection::InvalidCell(12)));
    }
}
