//! Start invariant: step 0 is the empty board with no move.

use super::Invariant;
use crate::history::{History, Snapshot};

/// Invariant: the history begins with exactly the starting snapshot.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first() == Some(&Snapshot::start())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
