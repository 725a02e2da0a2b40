//! Alternating mover invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameState, Symbol};

/// Invariant: the symbol on turn follows from the number of moves played.
///
/// While the game runs, the mover is the symbol for the next ply. Once
/// it ends, the mover is frozen on the symbol that made the last move.
pub struct AlternatingMoverInvariant;

impl Invariant<GameState> for AlternatingMoverInvariant {
    fn holds(game: &GameState) -> bool {
        let plies = game.history().len();
        if game.is_over() {
            plies > 0 && game.mover() == Symbol::for_ply(plies - 1)
        } else {
            game.mover() == Symbol::for_ply(plies)
        }
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::played;
    use crate::Position;

    #[test]
    fn test_holds_across_moves() {
        let game = played(&[
            (Position::Center, Position::Center),
            (Position::Center, Position::TopLeft),
        ]);
        assert_eq!(game.mover(), Symbol::X);
        assert!(AlternatingMoverInvariant::holds(&game));
    }

    #[test]
    fn test_flipped_mover_violates() {
        let mut game = played(&[(Position::Center, Position::Center)]);
        game.mover = Symbol::X;
        assert!(!AlternatingMoverInvariant::holds(&game));
    }
}
