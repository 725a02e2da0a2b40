//! Move legality and the "send" rule.

use crate::{MetaBoard, Move, Position, RuleError};
use tracing::{instrument, trace};

/// Checks a move against the board and the mandatory sub-board.
///
/// Checks run in a fixed order: mandatory sub-board, decided sub-board,
/// occupied cell. A pointer at a sub-board that is no longer open grants
/// free choice, exactly as if it were absent.
#[instrument(level = "trace", skip(board))]
pub fn legal_move(board: &MetaBoard, mandatory: Option<Position>, mv: Move) -> Result<(), RuleError> {
    if let Some(expected) = mandatory
        && expected != mv.sub_board
        && !board.sub_board(expected).outcome().is_decided()
    {
        return Err(RuleError::WrongSubBoard {
            expected,
            requested: mv.sub_board,
        });
    }

    let target = board.sub_board(mv.sub_board);
    if target.outcome().is_decided() {
        return Err(RuleError::SubBoardAlreadyDecided(mv.sub_board));
    }

    if !target.is_empty(mv.cell) {
        return Err(RuleError::CellOccupied {
            sub_board: mv.sub_board,
            cell: mv.cell,
        });
    }

    Ok(())
}

/// The sub-board the next mover must play in after `cell` was chosen.
///
/// The cell's row and column name the next sub-board. If that sub-board
/// is already won or drawn the result is `None`: free choice.
#[instrument(level = "trace", skip(board))]
pub fn next_mandatory_board(board: &MetaBoard, cell: Position) -> Option<Position> {
    let next = (!board.sub_board(cell).outcome().is_decided()).then_some(cell);
    trace!(?next, "Computed mandatory sub-board");
    next
}
