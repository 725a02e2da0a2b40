//! Contract-based validation for moves.
//!
//! Contracts pair a precondition checked before every move with a
//! postcondition checked after it: {P} apply_move {Q}.

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{GameState, Move, RuleError};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RuleError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for [`GameState::apply_move`].
///
/// Precondition: the rule engine accepts the move.
///
/// Postconditions:
/// - exactly one move was appended to the history
/// - every game invariant holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    #[instrument(level = "trace", skip(state))]
    fn pre(state: &GameState, action: &Move) -> Result<(), RuleError> {
        state.legal_move(action.sub_board, action.cell)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();

        let extended = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !extended {
            violations.push(InvariantViolation::new("History extends by exactly one move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}
