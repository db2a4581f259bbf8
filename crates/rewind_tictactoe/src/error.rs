//! Rejection reasons for intents the rules do not allow.

use crate::position::Position;

/// Why a move or jump was refused.
///
/// Rejections never leave partial state behind: the operation either
/// produces a complete new state or nothing changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),

    /// The board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The requested step does not exist in the history.
    #[display("Step {} is outside the history (length {})", step, len)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// The cell index is not on the board.
    #[display("Cell {} is not on the board (must be 0-8)", _0)]
    InvalidCell(usize),
}

impl std::error::Error for Rejection {}
