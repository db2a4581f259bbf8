//! Derived display data for the presentation layer.
//!
//! Nothing here is stored between operations: a [`GameView`] is rebuilt
//! from the [`GameState`] after every accepted intent.

use crate::controller::GameState;
use crate::position::Position;
use crate::rules::{Outcome, detect};
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The displayed board is won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The displayed board is full with no winner.
    #[display("Draw")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Status for `outcome` when `step` is displayed.
    pub fn from_outcome(outcome: &Outcome, step: usize) -> Self {
        match outcome {
            Outcome::Win(player, _) => Status::Winner(*player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(Player::to_move_at(step)),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button caption, e.g. `Go to move #3 (2,1)`.
    description: String,
    /// Whether this step is the one displayed.
    is_current: bool,
}

impl MoveEntry {
    /// Builds the entry for `step`, produced by a move at `last_move`.
    pub fn new(step: usize, last_move: Option<Position>, cursor: usize) -> Self {
        Self {
            step,
            description: Self::describe(step, last_move),
            is_current: step == cursor,
        }
    }

    /// Caption for a history step.
    ///
    /// Column and row are 1-based.
    pub fn describe(step: usize, last_move: Option<Position>) -> String {
        match last_move {
            Some(pos) if step > 0 => {
                format!("Go to move #{} ({},{})", step, pos.column(), pos.row())
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Board at the displayed step.
    board: Board,
    /// Status line.
    status: Status,
    /// Winning squares to highlight; empty unless the board is won.
    highlighted: Vec<Position>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Whether `moves` runs from the game start down.
    sort_ascending: bool,
    /// Caption of the sort toggle.
    sort_label: String,
}

impl GameView {
    /// Derives the view for a game state.
    #[instrument(skip(state), fields(step = state.step(), len = state.history().len()))]
    pub fn from_state(state: &GameState) -> Self {
        let board = *state.board();
        let outcome = detect(&board);

        let mut moves = move_list(state);
        if !state.sort_ascending() {
            moves.reverse();
        }

        let sort_label = if state.sort_ascending() {
            "Sort descending"
        } else {
            "Sort ascending"
        };

        Self {
            board,
            status: Status::from_outcome(&outcome, state.step()),
            highlighted: outcome
                .winning_line()
                .map(|line| line.to_vec())
                .unwrap_or_default(),
            moves,
            sort_ascending: state.sort_ascending(),
            sort_label: sort_label.to_string(),
        }
    }

    /// Whether the square at `pos` belongs to the winning line.
    pub fn is_square_won(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }

    /// Renders the view as plain text.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.board.display(), self.status);
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step, entry.description));
        }
        out.push_str(&format!("[{}]", self.sort_label));
        out
    }
}

/// Move list in ascending step order, independent of the sort flag.
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    state
        .history()
        .snapshots()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| MoveEntry::new(step, *snapshot.last_move(), state.step()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_start() {
        assert_eq!(MoveEntry::describe(0, None), "Go to game start");
    }

    #[test]
    fn test_describe_uses_column_then_row() {
        assert_eq!(
            MoveEntry::describe(1, Some(Position::MiddleRight)),
            "Go to move #1 (3,2)"
        );
        assert_eq!(
            MoveEntry::describe(4, Some(Position::BottomLeft)),
            "Go to move #4 (1,3)"
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_initial_view() {
        let view = GameView::from_state(&GameState::new());
        assert_eq!(view.status(), &Status::NextPlayer(Player::X));
        assert!(view.highlighted().is_empty());
        assert_eq!(view.moves().len(), 1);
        assert!(*view.moves()[0].is_current());
        assert_eq!(view.sort_label(), "Sort descending");
    }
}
