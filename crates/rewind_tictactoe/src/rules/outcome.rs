//! Board classification: in progress, won, or drawn.

use super::win::{Line, winning_line};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal or non-terminal classification of a board.
///
/// Always derived from a board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A player holds the given line.
    Win(Player, Line),
    /// The board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player, _) => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win(_, line) => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further move is legal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Classifies a board.
///
/// A complete line takes precedence over a full board, so a last move that
/// both fills the board and completes a line is a win.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        Outcome::Win(player, line)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(detect(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_win() {
        let board = Board::from_squares([X, X, X, E, E, E, E, E, E]);
        assert_eq!(
            detect(&board),
            Outcome::Win(
                Player::X,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            )
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_squares([X, O, X, O, X, O, O, X, O]);
        let outcome = detect(&board);
        assert_eq!(outcome, Outcome::Draw);
        assert!(outcome.is_terminal());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = Board::from_squares([X, O, X, O, X, O, X, X, O]);
        assert_eq!(detect(&board).winner(), Some(Player::X));
    }

    #[test]
    fn test_detect_is_stable() {
        let board = Board::from_squares([X, O, E, E, X, E, E, O, E]);
        assert_eq!(detect(&board), detect(&board));
    }
}
