//! Interchangeable move-selection strategies.
//!
//! Every strategy is a function from a borrowed game state to one legal
//! move. They share nothing beyond that contract, so a game driver can
//! swap a search engine for a random player or an external evaluator
//! without noticing.

mod external;
mod first;
mod minimax;
mod random;

pub use external::ExternalStrategy;
pub use first::FirstAvailable;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::{GameState, Move, SearchError};
use tracing::{debug, instrument, warn};

/// Chooses moves for whichever symbol is on turn.
pub trait MoveStrategy: Send {
    /// Picks a legal move for the mover of `state`.
    ///
    /// Must not be called on a finished game; doing so yields
    /// [`SearchError::NoLegalMove`].
    fn select_move(&mut self, state: &GameState) -> Result<Move, SearchError>;

    /// Display name.
    fn name(&self) -> &str;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn select_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        (**self).select_move(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Asks `strategy` for a move and confirms the rules accept it.
#[instrument(skip(state, strategy), fields(strategy = strategy.name(), mover = %state.mover()))]
pub fn select_move<S: MoveStrategy + ?Sized>(
    state: &GameState,
    strategy: &mut S,
) -> Result<Move, SearchError> {
    let mv = strategy.select_move(state)?;
    if let Err(reason) = state.legal_move(mv.sub_board, mv.cell) {
        warn!(%mv, %reason, "Strategy chose an illegal move");
        return Err(SearchError::IllegalSuggestion { mv, reason });
    }
    debug!(%mv, "Strategy chose move");
    Ok(mv)
}
