//! Won lists invariant: won lists mirror sub-board outcomes.

use super::Invariant;
use crate::{GameState, Outcome, Position, Symbol};

/// Invariant: each symbol's won list holds exactly the sub-boards whose
/// outcome is won by that symbol, each once.
pub struct WonListsInvariant;

impl Invariant<GameState> for WonListsInvariant {
    fn holds(game: &GameState) -> bool {
        [Symbol::X, Symbol::O].into_iter().all(|symbol| {
            let mut listed = game.won_by(symbol).to_vec();
            listed.sort();
            let owned: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| game.board().sub_board(*pos).outcome() == Outcome::Won(symbol))
                .collect();
            listed == owned
        })
    }

    fn description() -> &'static str {
        "Won lists match sub-board outcomes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::x_wins_top_left;

    #[test]
    fn test_holds_after_sub_board_win() {
        assert!(WonListsInvariant::holds(&x_wins_top_left()));
    }

    #[test]
    fn test_missing_entry_violates() {
        let mut game = x_wins_top_left();
        game.won = Default::default();
        assert!(!WonListsInvariant::holds(&game));
    }
}
