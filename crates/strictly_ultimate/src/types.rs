//! Core domain types for ultimate tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The mark a player places. Emptiness is `Option::None`, never a symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Symbol that makes the `ply`-th move of a game (0-based).
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Symbol::X } else { Symbol::O }
    }
}

/// Cached result of a 3x3 grid, either a sub-board or the meta-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Still playable.
    #[default]
    Open,
    /// A line of three belongs to this symbol.
    Won(Symbol),
    /// Exhausted with no line.
    Drawn,
}

impl Outcome {
    /// True once the grid is won or drawn.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Open)
    }

    /// The winning symbol, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(symbol),
            Outcome::Open | Outcome::Drawn => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Open => write!(f, "open"),
            Outcome::Won(symbol) => write!(f, "won by {}", symbol),
            Outcome::Drawn => write!(f, "drawn"),
        }
    }
}

/// Lifecycle of a game. Terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// The symbol completed a line of won sub-boards.
    Won(Symbol),
    /// Every sub-board is decided and no meta-line exists.
    Drawn,
}

impl GameStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Open => GameStatus::InProgress,
            Outcome::Won(symbol) => GameStatus::Won(symbol),
            Outcome::Drawn => GameStatus::Drawn,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(symbol) => write!(f, "{} wins", symbol),
            GameStatus::Drawn => write!(f, "draw"),
        }
    }
}
