//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and are checked after each move in
//! debug builds.

pub mod alternating_mover;
pub mod cached_outcomes;
pub mod monotonic_cells;
pub mod won_lists;

pub use alternating_mover::AlternatingMoverInvariant;
pub use cached_outcomes::CachedOutcomesInvariant;
pub use monotonic_cells::MonotonicCellsInvariant;
pub use won_lists::WonListsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every game invariant as a composable set.
pub type GameInvariants = (
    MonotonicCellsInvariant,
    AlternatingMoverInvariant,
    CachedOutcomesInvariant,
    WonListsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::x_wins_top_left;
    use crate::{GameState, Position, Symbol};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_sub_board_win() {
        assert!(GameInvariants::check_all(&x_wins_top_left()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = x_wins_top_left();
        // A mark with no history entry, and a stray won-list entry.
        game.board.place(Position::BottomRight, Position::Center, Symbol::O);
        game.won.push(Symbol::O, Position::Center);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicCellsInvariant, AlternatingMoverInvariant);
        assert!(TwoInvariants::check_all(&x_wins_top_left()).is_ok());
    }
}
