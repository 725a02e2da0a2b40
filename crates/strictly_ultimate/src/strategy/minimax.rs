//! Strategy wrapper around the minimax engine.

use super::MoveStrategy;
use crate::search::{Evaluation, MinimaxEngine, SearchLimits};
use crate::{GameState, Move, SearchError};
use std::time::{Duration, Instant};

/// Searches for whichever symbol is on turn.
///
/// The optional time limit is turned into a fresh deadline on every call.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    name: String,
    max_depth: u32,
    node_budget: Option<u64>,
    time_limit: Option<Duration>,
    evaluation: Evaluation,
}

impl MinimaxStrategy {
    /// Creates a depth-bounded strategy with the material evaluation.
    pub fn new(name: impl Into<String>, max_depth: u32) -> Self {
        Self {
            name: name.into(),
            max_depth,
            node_budget: None,
            time_limit: None,
            evaluation: Evaluation::default(),
        }
    }

    /// Caps the nodes visited per move.
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Caps the wall-clock time per move.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Selects the evaluation formulation.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    fn engine_for(&self, state: &GameState) -> MinimaxEngine {
        let mut limits = SearchLimits::depth(self.max_depth);
        if let Some(nodes) = self.node_budget {
            limits = limits.with_node_budget(nodes);
        }
        if let Some(limit) = self.time_limit {
            limits = limits.with_deadline(Instant::now() + limit);
        }
        MinimaxEngine::new(state.mover(), limits).with_evaluation(self.evaluation)
    }
}

impl MoveStrategy for MinimaxStrategy {
    fn select_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        self.engine_for(state)
            .search(state)
            .map(|report| report.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_for_either_symbol() {
        let mut strategy = MinimaxStrategy::new("minimax", 1);
        let mut game = GameState::new();
        for _ in 0..4 {
            let mv = strategy.select_move(&game).unwrap();
            game.apply_move(mv).unwrap();
        }
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_budgeted_strategy_still_moves() {
        let mut strategy = MinimaxStrategy::new("minimax", 5)
            .with_node_budget(100)
            .with_time_limit(Duration::from_millis(50));
        let mv = strategy.select_move(&GameState::new()).unwrap();
        assert!(GameState::new().legal_moves().contains(&mv));
    }
}
