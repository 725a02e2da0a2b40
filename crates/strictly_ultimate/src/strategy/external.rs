//! Adapter for move choosers defined outside this crate.

use super::MoveStrategy;
use crate::{GameState, Move, SearchError};
use tracing::warn;

/// Wraps any `FnMut(&GameState) -> Option<Move>`, such as a learned
/// policy, and holds it to the same contract as the built-in strategies.
///
/// `None` from the closure is reported as [`SearchError::NoLegalMove`];
/// a move the rules reject becomes [`SearchError::IllegalSuggestion`].
pub struct ExternalStrategy<F> {
    name: String,
    chooser: F,
}

impl<F> ExternalStrategy<F>
where
    F: FnMut(&GameState) -> Option<Move> + Send,
{
    /// Creates an adapter around `chooser`.
    pub fn new(name: impl Into<String>, chooser: F) -> Self {
        Self {
            name: name.into(),
            chooser,
        }
    }
}

impl<F> MoveStrategy for ExternalStrategy<F>
where
    F: FnMut(&GameState) -> Option<Move> + Send,
{
    fn select_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        let mv = (self.chooser)(state).ok_or(SearchError::NoLegalMove)?;
        state.legal_move(mv.sub_board, mv.cell).map_err(|reason| {
            warn!(strategy = %self.name, %mv, %reason, "External move rejected");
            SearchError::IllegalSuggestion { mv, reason }
        })?;
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
