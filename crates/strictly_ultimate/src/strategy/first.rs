//! Deterministic baseline that plays the first legal move.

use super::MoveStrategy;
use crate::{GameState, Move, SearchError};

/// Plays the first move in [`GameState::legal_moves`] order.
#[derive(Debug, Clone)]
pub struct FirstAvailable {
    name: String,
}

impl FirstAvailable {
    /// Creates the strategy.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveStrategy for FirstAvailable {
    fn select_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        state
            .legal_moves()
            .first()
            .copied()
            .ok_or(SearchError::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_picks_first_cell_of_mandatory_board() {
        let mut game = GameState::new();
        game.apply_move(Move::new(Position::Center, Position::TopLeft)).unwrap();
        let mv = FirstAvailable::new("first").select_move(&game).unwrap();
        assert_eq!(mv, Move::new(Position::TopLeft, Position::TopLeft));
    }
}
