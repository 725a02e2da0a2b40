//! Uniformly random legal moves.

use super::MoveStrategy;
use crate::{GameState, Move, SearchError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the OS, or from `seed` when given.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        state
            .legal_moves()
            .choose(&mut self.rng)
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
    use crate::GameStatus;

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut strategy = RandomStrategy::new("random", Some(seed));
            let mut game = GameState::new();
            while !game.is_over() {
                let mv = strategy.select_move(&game).unwrap();
                game.apply_move(mv).unwrap();
            }
            game
        };
        assert_eq!(play(7).history(), play(7).history());
    }

    #[test]
    fn test_finished_game_has_no_move() {
        let mut game = GameState::new();
        game.status = GameStatus::Won(crate::Symbol::O);
        let mut strategy = RandomStrategy::new("random", Some(1));
        assert_eq!(strategy.select_move(&game), Err(SearchError::NoLegalMove));
    }
}
