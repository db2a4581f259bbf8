//! Tic-tac-toe with time travel.
//!
//! The crate is the game state machine behind a tic-tac-toe board whose
//! every past position stays reachable:
//!
//! - **Rules**: [`detect`] classifies a [`Board`] as in progress, won, or drawn.
//! - **Moves**: [`apply_move`] validates a single move and returns a new board.
//! - **History**: [`History`] keeps the ordered snapshots and truncates the
//!   abandoned future when a move is made after rewinding.
//! - **Controller**: [`Game`] owns a [`GameState`], applies [`Intent`]s and
//!   exposes the derived [`GameView`].
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! for cell in [0, 1, 4, 3, 8] {
//!     game.handle_click(cell);
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//! assert_eq!(
//!     game.highlighted_cells(),
//!     vec![Position::TopLeft, Position::Center, Position::BottomRight]
//! );
//!
//! // Rewind and play a different line.
//! game.jump_to(2).unwrap();
//! game.handle_click(6);
//! assert_eq!(game.state().history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod applier;
mod controller;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use applier::{CellIsEmpty, GameNotOver, LegalMove, Move, apply_move};
pub use controller::{Game, GameState, Intent};
pub use error::Rejection;
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, detect, winning_line};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, Status};
