//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// Winning lines, checked in this order.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first line held entirely by one player.
///
/// Returns the player and the line, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((player, line))
    })
}
