//! Monotonic cells invariant: a marked cell is never overwritten.

use super::Invariant;
use crate::{GameState, MetaBoard, Symbol};

/// Invariant: replaying the history onto an empty board marks only
/// empty cells and reproduces the current cells exactly.
pub struct MonotonicCellsInvariant;

impl Invariant<GameState> for MonotonicCellsInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = MetaBoard::new();

        for (ply, mv) in game.history().iter().enumerate() {
            if !reconstructed.sub_board(mv.sub_board).is_empty(mv.cell) {
                return false;
            }
            reconstructed.place(mv.sub_board, mv.cell, Symbol::for_ply(ply));
        }

        reconstructed.cells() == game.board().cells()
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten) and match the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::played;
    use crate::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicCellsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let game = played(&[
            (Position::Center, Position::TopLeft),
            (Position::TopLeft, Position::Center),
            (Position::Center, Position::BottomRight),
        ]);
        assert!(MonotonicCellsInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = played(&[(Position::Center, Position::TopLeft)]);
        game.board.place(Position::Center, Position::TopLeft, Symbol::O);
        assert!(!MonotonicCellsInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = played(&[(Position::Center, Position::TopLeft)]);
        game.history.push(Move::new(Position::Center, Position::TopLeft));
        assert!(!MonotonicCellsInvariant::holds(&game));
    }
}
