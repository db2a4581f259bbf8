//! Move validation and application.
//!
//! Preconditions are first-class: each one can be checked on its own, and
//! [`LegalMove`] composes them in the order the rules require.

use crate::error::Rejection;
use crate::position::Position;
use crate::rules::detect;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Precondition: the board must not already be decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`Rejection::GameOver`] if the board is won or drawn.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), Rejection> {
        if detect(board).is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`Rejection::OccupiedCell`] if the square is taken.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), Rejection> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(Rejection::OccupiedCell(mov.position))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), Rejection> {
        GameNotOver::check(board)?;
        CellIsEmpty::check(mov, board)?;
        Ok(())
    }
}

/// Applies a move to a board, returning the resulting board.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`Rejection::GameOver`] if the board is already decided, or
/// [`Rejection::OccupiedCell`] if the square is taken.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, position: Position, player: Player) -> Result<Board, Rejection> {
    let mov = Move::new(player, position);
    if let Err(rejection) = LegalMove::check(&mov, board) {
        debug!(%rejection, "Move rejected");
        return Err(rejection);
    }
    Ok(board.with_mark(position, player))
}
