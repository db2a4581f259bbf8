//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the history manager and the controller can recompute them
//! for any snapshot.

pub mod outcome;
pub mod win;

pub use outcome::{Outcome, detect};
pub use win::{LINES, Line, winning_line};
