//! Serializable, read-only view of a game.
//!
//! This is everything a transport layer needs to render or transmit a
//! game. Wire framing is left to that layer; the snapshot only promises
//! a stable serde shape.

use crate::{GameState, GameStatus, MetaBoard, Move, Position, RuleError, Symbol, WonBoards};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Cells indexed `[board_row][board_col][cell_row][cell_col]`.
pub type NestedGrid = [[[[Option<Symbol>; 3]; 3]; 3]; 3];

/// Full external snapshot of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Every cell of every sub-board.
    pub boards: NestedGrid,
    /// The symbol on turn.
    pub mover: Symbol,
    /// Mandatory sub-board, `None` for free choice.
    pub mandatory: Option<Position>,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Sub-boards won by each symbol, in winning order.
    pub won: WonBoards,
    /// Every move applied so far.
    pub history: Vec<Move>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        let cells = game.board().cells();
        let boards = std::array::from_fn(|board_row| {
            std::array::from_fn(|board_col| {
                let sub_board = cells[board_row * 3 + board_col];
                std::array::from_fn(|cell_row| {
                    std::array::from_fn(|cell_col| sub_board[cell_row * 3 + cell_col])
                })
            })
        });

        Self {
            boards,
            mover: game.mover(),
            mandatory: game.mandatory(),
            status: game.status(),
            won: game.won().clone(),
            history: game.history().to_vec(),
        }
    }
}

impl GameSnapshot {
    /// Rebuilds the meta-board from the grid alone, recomputing outcomes.
    pub fn meta_board(&self) -> MetaBoard {
        MetaBoard::from_cells(std::array::from_fn(|sub_board| {
            let rows = &self.boards[sub_board / 3][sub_board % 3];
            std::array::from_fn(|cell| rows[cell / 3][cell % 3])
        }))
    }

    /// A one-line status for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::InProgress => match self.mandatory {
                Some(pos) => format!("In progress. {} to move in sub-board {}.", self.mover, pos),
                None => format!("In progress. {} to move anywhere.", self.mover),
            },
            GameStatus::Won(symbol) => format!("Game over. {} wins!", symbol),
            GameStatus::Drawn => "Game over. Draw!".to_string(),
        }
    }
}

/// Why a snapshot could not be turned back into a game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotError {
    /// A recorded move is illegal when replayed.
    #[display("History does not replay: {}", _0)]
    IllegalHistory(RuleError),

    /// The replayed game disagrees with the recorded fields.
    #[display("Snapshot field '{}' disagrees with its history", _0)]
    Mismatch(&'static str),
}

impl std::error::Error for SnapshotError {}

impl From<RuleError> for SnapshotError {
    fn from(err: RuleError) -> Self {
        SnapshotError::IllegalHistory(err)
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    #[instrument(skip(snapshot), fields(moves = snapshot.history.len()))]
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = GameState::replay(&snapshot.history)?;
        let replayed = GameSnapshot::from(&game);

        let mismatch = if replayed.boards != snapshot.boards {
            Some("boards")
        } else if replayed.mover != snapshot.mover {
            Some("mover")
        } else if replayed.mandatory != snapshot.mandatory {
            Some("mandatory")
        } else if replayed.status != snapshot.status {
            Some("status")
        } else if replayed.won != snapshot.won {
            Some("won")
        } else {
            None
        };

        if let Some(field) = mismatch {
            warn!(field, "Snapshot rejected");
            return Err(SnapshotError::Mismatch(field));
        }

        debug!("Snapshot restored");
        Ok(game)
    }
}
