//! Monotonic history: each step fills exactly the square it names.

use super::Invariant;
use crate::history::History;
use crate::types::Square;

/// Invariant: each snapshot differs from its predecessor in one square.
///
/// The changed square is the snapshot's `last_move`, and it was empty
/// beforehand. Marks are never removed or overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = *after.last_move() else {
                return false;
            };
            before.board().diff(after.board()) == vec![pos]
                && before.board().get(pos) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly the empty square it records"
    }
}
