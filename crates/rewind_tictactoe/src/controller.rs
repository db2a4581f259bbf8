//! Game controller: a state record, a pure reducer, and its owner.
//!
//! [`GameState::apply`] maps `(state, intent)` to a new state without
//! touching the old one. [`Game`] holds the current state, replaces it
//! wholesale on every accepted intent, and keeps the derived [`GameView`]
//! up to date.

use crate::error::Rejection;
use crate::history::History;
use crate::position::Position;
use crate::rules::detect;
use crate::types::Board;
use crate::view::{GameView, MoveEntry, Status, move_list};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Click the cell with this board index (0-8).
    Click(usize),
    /// Display this history step.
    JumpTo(usize),
    /// Reverse the displayed move list.
    ToggleSortOrder,
}

/// Complete controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    step: usize,
    sort_ascending: bool,
}

impl GameState {
    /// Fresh game with the move list ascending.
    pub fn new() -> Self {
        Self::with_sort_order(true)
    }

    /// Fresh game with the given move list order.
    pub fn with_sort_order(sort_ascending: bool) -> Self {
        Self {
            history: History::new(),
            step: 0,
            sort_ascending,
        }
    }

    /// The full history, including steps after the cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Displayed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the move list is shown from the game start down.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Board at the displayed step.
    pub fn board(&self) -> &Board {
        // The cursor always indexes an existing snapshot.
        self.history.snapshots()[self.step].board()
    }

    /// Applies an intent, producing the next state.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the intent is not allowed;
    /// `self` is unchanged either way.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn apply(&self, intent: Intent) -> Result<GameState, Rejection> {
        match intent {
            Intent::Click(cell) => {
                let position = Position::try_from(cell)?;
                let (history, step) = self.history.record_move(self.step, position)?;
                Ok(GameState {
                    history,
                    step,
                    sort_ascending: self.sort_ascending,
                })
            }
            Intent::JumpTo(step) => {
                let step = self.history.jump_to(step)?;
                Ok(GameState {
                    history: self.history.clone(),
                    step,
                    sort_ascending: self.sort_ascending,
                })
            }
            Intent::ToggleSortOrder => Ok(GameState {
                history: self.history.clone(),
                step: self.step,
                sort_ascending: !self.sort_ascending,
            }),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the current game state.
///
/// Every public operation runs to completion and returns the fresh view.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    view: GameView,
}

impl Game {
    /// Starts a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Starts a new game with the given move list order.
    #[instrument]
    pub fn with_sort_order(sort_ascending: bool) -> Self {
        Self::from_state(GameState::with_sort_order(sort_ascending))
    }

    fn from_state(state: GameState) -> Self {
        let view = GameView::from_state(&state);
        Self { state, view }
    }

    fn replace(&mut self, state: GameState) -> &GameView {
        self.view = GameView::from_state(&state);
        self.state = state;
        if detect(self.state.board()).is_terminal() {
            info!(status = %self.view.status(), step = self.state.step, "Game decided");
        }
        &self.view
    }

    /// Handles a click on a board cell.
    ///
    /// Clicks on occupied cells, on a decided board, or off the board are
    /// ignored and leave the state untouched.
    #[instrument(skip(self), fields(step = self.state.step))]
    pub fn handle_click(&mut self, cell: usize) -> &GameView {
        match self.state.apply(Intent::Click(cell)) {
            Ok(state) => self.replace(state),
            Err(rejection) => {
                debug!(%rejection, "Click ignored");
                &self.view
            }
        }
    }

    /// Displays a past (or the latest) step.
    ///
    /// # Errors
    ///
    /// [`Rejection::InvalidStep`] if `step` is not in the history; the
    /// state is unchanged.
    #[instrument(skip(self), fields(len = self.state.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<&GameView, Rejection> {
        match self.state.apply(Intent::JumpTo(step)) {
            Ok(state) => Ok(self.replace(state)),
            Err(rejection) => {
                warn!(%rejection, "Jump rejected");
                Err(rejection)
            }
        }
    }

    /// Reverses the displayed move list.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) -> &GameView {
        match self.state.apply(Intent::ToggleSortOrder) {
            Ok(state) => self.replace(state),
            Err(rejection) => {
                warn!(%rejection, "Sort toggle rejected");
                &self.view
            }
        }
    }

    /// Routes an intent to the matching operation.
    ///
    /// # Errors
    ///
    /// Only jumps can fail; rejected clicks are ignored.
    pub fn dispatch(&mut self, intent: Intent) -> Result<&GameView, Rejection> {
        match intent {
            Intent::Click(cell) => Ok(self.handle_click(cell)),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleSortOrder => Ok(self.toggle_sort_order()),
        }
    }

    /// Current state record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// View of the current state.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board at the displayed step.
    pub fn board(&self) -> Board {
        *self.state.board()
    }

    /// Status line for the displayed step.
    pub fn status(&self) -> Status {
        *self.view.status()
    }

    /// Winning squares on the displayed board.
    pub fn highlighted_cells(&self) -> Vec<Position> {
        self.view.highlighted().clone()
    }

    /// Move list in ascending step order, ignoring the sort flag.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        move_list(&self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_reducer_leaves_input_untouched() {
        let state = GameState::new();
        let next = state.apply(Intent::Click(4)).unwrap();
        assert_eq!(state, GameState::new());
        assert_eq!(next.step(), 1);
    }

    #[test]
    fn test_click_off_board_rejected() {
        let state = GameState::new();
        assert_eq!(state.apply(Intent::Click(9)), Err(Rejection::InvalidCell(9)));
    }

    #[test]
    fn test_toggle_keeps_history_and_cursor() {
        let state = GameState::new().apply(Intent::Click(0)).unwrap();
        let toggled = state.apply(Intent::ToggleSortOrder).unwrap();
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.step(), state.step());
        assert!(!toggled.sort_ascending());
    }

    #[test]
    fn test_ignored_click_keeps_view() {
        let mut game = Game::new();
        game.handle_click(4);
        let before = game.view().clone();
        game.handle_click(4);
        assert_eq!(game.view(), &before);
        assert_eq!(game.status(), Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut game = Game::new();
        game.dispatch(Intent::Click(0)).unwrap();
        game.dispatch(Intent::JumpTo(0)).unwrap();
        assert_eq!(game.state().step(), 0);
        assert!(game.dispatch(Intent::JumpTo(5)).is_err());
        game.dispatch(Intent::ToggleSortOrder).unwrap();
        assert!(!game.state().sort_ascending());
    }

    #[test]
    fn test_owner_toggle_matches_reducer() {
        let mut game = Game::new();
        game.handle_click(0);
        let expected = game.state().apply(Intent::ToggleSortOrder).unwrap();

        let view = game.toggle_sort_order().clone();

        assert_eq!(game.state(), &expected);
        assert_eq!(view, GameView::from_state(&expected));
        assert_eq!(view.sort_label(), "Sort ascending");
    }
}
