//! Depth-bounded minimax search.
//!
//! The engine explores private clones of the game it is given; the
//! caller's state is only ever borrowed. Scores are integers:
//!
//! - a meta-board won by the engine's symbol scores [`WIN_SCORE`], a
//!   meta-board won by the opponent scores `-WIN_SCORE`, regardless of
//!   remaining depth;
//! - at the depth cutoff a position scores the number of sub-boards the
//!   engine has won minus the number its opponent has won;
//! - a drawn or move-less position scores zero.
//!
//! The cutoff heuristic is always measured from the engine's own symbol,
//! never from the side to move at the node. [`Evaluation::Negamax`] is the
//! mover-relative formulation of the same search, kept as a labelled
//! alternative.

use crate::{GameState, GameStatus, Move, Symbol};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Score of a won game. Larger than any material difference (at most 9).
pub const WIN_SCORE: i32 = 10;

/// How many budget polls pass between clock reads.
const DEADLINE_CHECK_INTERVAL: u64 = 256;

/// Which formulation of the recursive evaluation to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Evaluation {
    /// Max/min alternation with every leaf scored from the engine's symbol.
    #[default]
    Material,
    /// Negamax: leaves scored from the node mover's view, negated upward.
    Negamax,
}

/// Bounds on a single search.
///
/// `max_depth` counts replies after the engine's own candidate move: at
/// depth 0 each candidate is scored statically, at depth 1 after every
/// opponent reply, and so on. Exhausting `node_budget` or passing
/// `deadline` turns every unexpanded node into a static leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies searched below each root candidate.
    pub max_depth: u32,
    /// Maximum number of nodes to visit.
    pub node_budget: Option<u64>,
    /// Wall-clock point after which the search stops expanding.
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    /// Limits with only a depth bound.
    pub fn depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            node_budget: None,
            deadline: None,
        }
    }

    /// Adds a node budget.
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Adds a deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Why a search produced no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The position has no legal move (the game is over).
    #[display("No legal move available")]
    NoLegalMove,

    /// The engine was asked to act for the symbol not on turn.
    #[display("Engine plays {} but {} is on turn", engine, mover)]
    NotOnTurn {
        /// The symbol the engine acts for.
        engine: Symbol,
        /// The symbol on turn.
        mover: Symbol,
    },

    /// A delegated evaluator proposed a move the rules reject.
    #[display("Strategy proposed illegal move {}: {}", mv, reason)]
    IllegalSuggestion {
        /// The proposed move.
        mv: Move,
        /// The rule engine's rejection.
        reason: crate::RuleError,
    },
}

impl std::error::Error for SearchError {}

/// The outcome of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct SearchReport {
    /// The chosen move.
    pub best_move: Move,
    /// Its score from the engine's point of view.
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
    /// True if a node budget or deadline cut the search short.
    pub truncated: bool,
}

/// Minimax search acting for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxEngine {
    symbol: Symbol,
    limits: SearchLimits,
    evaluation: Evaluation,
}

impl MinimaxEngine {
    /// Creates an engine for `symbol` using the material evaluation.
    pub fn new(symbol: Symbol, limits: SearchLimits) -> Self {
        Self {
            symbol,
            limits,
            evaluation: Evaluation::Material,
        }
    }

    /// Selects the evaluation formulation.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// The symbol this engine plays.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The search bounds.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Finds the best move for the engine's symbol in `state`.
    ///
    /// Candidates are tried in [`GameState::legal_moves`] order and the
    /// first one reaching the best score wins ties.
    #[instrument(
        skip(self, state),
        fields(symbol = %self.symbol, max_depth = self.limits.max_depth, evaluation = %self.evaluation)
    )]
    pub fn search(&self, state: &GameState) -> Result<SearchReport, SearchError> {
        if state.is_over() {
            return Err(SearchError::NoLegalMove);
        }
        if state.mover() != self.symbol {
            return Err(SearchError::NotOnTurn {
                engine: self.symbol,
                mover: state.mover(),
            });
        }

        let started = Instant::now();
        let mut search = Search::new(self);
        let mut best: Option<(Move, i32)> = None;

        for mv in state.legal_moves() {
            let mut child = state.clone();
            child.advance(mv);
            let score = search.root_child(&child);
            debug!(%mv, score, "Scored candidate");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best.ok_or(SearchError::NoLegalMove)?;
        let report = SearchReport::new(best_move, score, search.nodes, search.truncated);
        info!(
            best_move = %report.best_move,
            score = report.score,
            nodes = report.nodes,
            truncated = report.truncated,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Search complete"
        );
        Ok(report)
    }
}

/// Per-call search bookkeeping.
struct Search<'a> {
    engine: &'a MinimaxEngine,
    nodes: u64,
    polls: u64,
    truncated: bool,
}

impl<'a> Search<'a> {
    fn new(engine: &'a MinimaxEngine) -> Self {
        Self {
            engine,
            nodes: 0,
            polls: 0,
            truncated: false,
        }
    }

    /// Scores the position after one of the engine's candidate moves.
    fn root_child(&mut self, child: &GameState) -> i32 {
        match self.engine.evaluation {
            Evaluation::Material => self.minimax(child, 0, false),
            Evaluation::Negamax => -self.negamax(child, 0, self.engine.symbol.opponent()),
        }
    }

    fn minimax(&mut self, state: &GameState, depth: u32, maximizing: bool) -> i32 {
        self.nodes += 1;
        let me = self.engine.symbol;

        match state.status() {
            GameStatus::Won(winner) => return if winner == me { WIN_SCORE } else { -WIN_SCORE },
            GameStatus::Drawn => return 0,
            GameStatus::InProgress => {}
        }
        if depth >= self.engine.limits.max_depth || self.out_of_budget() {
            return material(state, me);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return 0;
        }

        let scores = moves.into_iter().map(|mv| {
            let mut child = state.clone();
            child.advance(mv);
            self.minimax(&child, depth + 1, !maximizing)
        });
        let best = if maximizing { scores.max() } else { scores.min() };
        best.unwrap_or(0)
    }

    /// Same search, scored from the perspective of `side`, the symbol to
    /// move at `state`.
    fn negamax(&mut self, state: &GameState, depth: u32, side: Symbol) -> i32 {
        self.nodes += 1;

        match state.status() {
            GameStatus::Won(winner) => return if winner == side { WIN_SCORE } else { -WIN_SCORE },
            GameStatus::Drawn => return 0,
            GameStatus::InProgress => {}
        }
        if depth >= self.engine.limits.max_depth || self.out_of_budget() {
            return material(state, side);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return 0;
        }

        moves
            .into_iter()
            .map(|mv| {
                let mut child = state.clone();
                child.advance(mv);
                -self.negamax(&child, depth + 1, side.opponent())
            })
            .max()
            .unwrap_or(0)
    }

    fn out_of_budget(&mut self) -> bool {
        if self.truncated {
            return true;
        }
        let limits = self.engine.limits;
        let over_nodes = limits.node_budget.is_some_and(|budget| self.nodes >= budget);
        let over_time = self.polls % DEADLINE_CHECK_INTERVAL == 0
            && limits.deadline.is_some_and(|deadline| Instant::now() >= deadline);
        self.polls += 1;
        if over_nodes || over_time {
            debug!(nodes = self.nodes, over_nodes, over_time, "Search budget exhausted");
            self.truncated = true;
        }
        self.truncated
    }
}

/// Sub-boards won by `symbol` minus sub-boards won by its opponent.
pub fn material(state: &GameState, symbol: Symbol) -> i32 {
    let mine = state.won_by(symbol).len() as i32;
    let theirs = state.won_by(symbol.opponent()).len() as i32;
    mine - theirs
}
