//! Branchable board history with time travel.
//!
//! A [`History`] is an ordered list of [`Snapshot`]s, always starting from
//! the empty board. Recording a move from an earlier step discards every
//! snapshot after that step before appending: once a player moves after
//! rewinding, the abandoned future is gone for good.

use crate::applier::apply_move;
use crate::error::Rejection;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::position::Position;
use crate::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One immutable board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    pub(crate) board: Board,
    /// Square that produced this snapshot; `None` for the game start.
    pub(crate) last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }
}

/// Ordered, branchable sequence of snapshots.
///
/// Never empty: step 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the starting snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::start()],
        }
    }

    /// Number of snapshots, including the start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the starting snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot at `step`, if it exists.
    pub fn snapshot(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // Non-empty by construction.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Player whose turn it is when `step` is displayed.
    pub fn player_to_move(step: usize) -> Player {
        Player::to_move_at(step)
    }

    /// Player who made the move producing `step`; `None` for the start.
    pub fn mover_of(step: usize) -> Option<Player> {
        step.checked_sub(1).map(Player::to_move_at)
    }

    /// Records a move made while `cursor` is displayed.
    ///
    /// Snapshots after `cursor` are dropped before the new one is appended.
    /// The mover is derived from the parity of `cursor`. Returns the new
    /// history and the step of the appended snapshot; `self` is unchanged.
    ///
    /// # Errors
    ///
    /// [`Rejection::InvalidStep`] if `cursor` is outside the history, or any
    /// rejection from [`apply_move`].
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn record_move(
        &self,
        cursor: usize,
        position: Position,
    ) -> Result<(History, usize), Rejection> {
        let current = self.snapshot(cursor).ok_or(Rejection::InvalidStep {
            step: cursor,
            len: self.len(),
        })?;

        let player = Self::player_to_move(cursor);
        let board = apply_move(current.board(), position, player)?;

        let mut snapshots = self.snapshots[..=cursor].to_vec();
        let discarded = self.len() - snapshots.len();
        if discarded > 0 {
            debug!(discarded, "Branching: discarding rewound snapshots");
        }
        snapshots.push(Snapshot {
            board,
            last_move: Some(position),
        });

        let history = History { snapshots };
        let step = history.len() - 1;
        info!(%player, %position, step, "Move recorded");

        debug_assert!(
            HistoryInvariants::check_all(&history).is_ok(),
            "history invariants violated after recording a move"
        );

        Ok((history, step))
    }

    /// Validates a jump to `step`, returning the new cursor.
    ///
    /// Pure navigation: the history itself never changes.
    ///
    /// # Errors
    ///
    /// [`Rejection::InvalidStep`] if `step` is outside the history.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn jump_to(&self, step: usize) -> Result<usize, Rejection> {
        if step < self.len() {
            Ok(step)
        } else {
            Err(Rejection::InvalidStep {
                step,
                len: self.len(),
            })
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
