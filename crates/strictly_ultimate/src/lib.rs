//! Ultimate tic-tac-toe: rules, game state machine and minimax search.
//!
//! # Architecture
//!
//! - **Rules**: pure line, draw and legality checks over 3x3 grids
//! - **Board**: sub-boards and the meta-board, with cached outcomes
//! - **Game**: the move state machine, with contracts and invariants
//! - **Search**: depth-bounded minimax over private clones of a game
//! - **Strategy**: interchangeable move selectors built on the above
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{GameState, MinimaxEngine, SearchLimits, Symbol};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameState::new();
//! let engine = MinimaxEngine::new(Symbol::X, SearchLimits::depth(1));
//! let report = engine.search(&game)?;
//! game.apply_move(report.best_move)?;
//! assert_eq!(game.mover(), Symbol::O);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod position;
mod search;
mod snapshot;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod strategy;

pub use action::{Move, RuleError};
pub use board::{MetaBoard, SubBoard};
pub use game::{GameState, WonBoards, apply_move, new_game};
pub use position::{ParsePositionError, Position};
pub use search::{
    Evaluation, MinimaxEngine, SearchError, SearchLimits, SearchReport, WIN_SCORE, material,
};
pub use snapshot::{GameSnapshot, NestedGrid, SnapshotError};
pub use strategy::{
    ExternalStrategy, FirstAvailable, MinimaxStrategy, MoveStrategy, RandomStrategy, select_move,
};
pub use types::{GameStatus, Outcome, Symbol};
