//! First-class invariants over a move history.
//!
//! Invariants are logical properties every reachable history satisfies.
//! They are checked in debug builds after each recorded move and can be
//! tested independently.

pub mod alternating_turn;
pub mod single_cell_delta;
pub mod starts_empty;

pub use alternating_turn::AlternatingTurnInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(holds, _)| !holds)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleCellDeltaInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::position::Position;

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let (history, _) = History::new().record_move(0, Position::TopLeft).unwrap();
        let (history, _) = history.record_move(1, Position::Center).unwrap();
        let (history, _) = history.record_move(2, Position::TopRight).unwrap();
        let (history, _) = history.record_move(1, Position::BottomLeft).unwrap();

        assert_eq!(history.len(), 3);
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmptyInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&History::new()).is_ok());
    }

    #[test]
    fn test_set_reports_every_violation() {
        let history = History { snapshots: Vec::new() };
        type Doubled = (StartsEmptyInvariant, StartsEmptyInvariant, AlternatingTurnInvariant);
        let err = Doubled::check_all(&history).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err[0].description, StartsEmptyInvariant::description());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("boom");
        assert_eq!(violation.to_string(), "Invariant violated: boom");
    }
}
