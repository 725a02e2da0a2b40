//! First-class move and rejection types.
//!
//! A move names a sub-board and a cell within it. The mover is implied
//! by the game state, so a move can be validated before it is applied.

use crate::{Position, Symbol};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A placement: which sub-board, and which cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// The sub-board being played into.
    pub sub_board: Position,
    /// The cell within that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(sub_board: Position, cell: Position) -> Self {
        Self { sub_board, cell }
    }

    /// Builds a move from four row/column coordinates, each in `0..3`.
    #[instrument]
    pub fn from_coords(board_row: usize, board_col: usize, cell_row: usize, cell_col: usize) -> Option<Self> {
        Some(Self {
            sub_board: Position::from_row_col(board_row, board_col)?,
            cell: Position::from_row_col(cell_row, cell_col)?,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.sub_board, self.cell)
    }
}

impl FromStr for Move {
    type Err = crate::ParsePositionError;

    /// Parses `"br,bc cr,cc"` or four whitespace-separated digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::ParsePositionError {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [sub_board, cell] => Ok(Self::new(sub_board.parse()?, cell.parse()?)),
            [br, bc, cr, cc] => {
                let coords: Vec<usize> = [br, bc, cr, cc]
                    .iter()
                    .map(|n| n.parse().map_err(|_| invalid()))
                    .collect::<Result<_, _>>()?;
                Self::from_coords(coords[0], coords[1], coords[2], coords[3]).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}

/// Why the rule engine rejected a move.
///
/// Every variant is recoverable: the state is untouched and the caller
/// may retry with another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RuleError {
    /// The previous move forces play into a different sub-board.
    #[display("Must play in sub-board {}, not {}", expected, requested)]
    WrongSubBoard {
        /// The mandatory sub-board.
        expected: Position,
        /// The sub-board that was requested.
        requested: Position,
    },

    /// The sub-board is already won or drawn.
    #[display("Sub-board {} is already decided", _0)]
    SubBoardAlreadyDecided(Position),

    /// The cell already holds a mark.
    #[display("Cell {} of sub-board {} is already occupied", cell, sub_board)]
    CellOccupied {
        /// The sub-board addressed.
        sub_board: Position,
        /// The occupied cell.
        cell: Position,
    },

    /// The game has reached a terminal state.
    #[display("Game is already over")]
    GameOver,

    /// A move was submitted on behalf of the player not on turn.
    #[display("It's {}'s turn, not {}'s", expected, actual)]
    WrongMover {
        /// The symbol on turn.
        expected: Symbol,
        /// The symbol that tried to move.
        actual: Symbol,
    },
}

impl std::error::Error for RuleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let mv = Move::from_coords(0, 0, 1, 1).unwrap();
        assert_eq!(mv, Move::new(Position::TopLeft, Position::Center));
        assert_eq!(Move::from_coords(0, 3, 1, 1), None);
    }

    #[test]
    fn test_parse_pair_and_digits() {
        let expected = Move::new(Position::MiddleRight, Position::BottomLeft);
        assert_eq!("1,2 2,0".parse::<Move>(), Ok(expected));
        assert_eq!("1 2 2 0".parse::<Move>(), Ok(expected));
        assert!("1 2 2".parse::<Move>().is_err());
        assert!("1 2 2 3".parse::<Move>().is_err());
    }

    #[test]
    fn test_error_messages_name_coordinates() {
        let err = RuleError::WrongSubBoard {
            expected: Position::Center,
            requested: Position::TopLeft,
        };
        assert_eq!(err.to_string(), "Must play in sub-board (1,1), not (0,0)");
        assert_eq!(
            RuleError::SubBoardAlreadyDecided(Position::BottomRight).to_string(),
            "Sub-board (2,2) is already decided"
        );
    }
}
