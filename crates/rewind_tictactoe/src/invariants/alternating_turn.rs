//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::history::History;

/// Invariant: the mark placed at step `i` belongs to the mover of `i`.
///
/// X makes every odd-numbered step, O every even-numbered one, so the
/// player to move is always derivable from the step alone.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                let placed = (*snapshot.last_move())
                    .and_then(|pos| snapshot.board().get(pos).player());
                placed.is_some() && placed == History::mover_of(step)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
