//! Cached outcomes invariant: caches agree with a full recomputation.

use super::Invariant;
use crate::{GameState, GameStatus, MetaBoard};

/// Invariant: every cached sub-board outcome, the meta outcome and the
/// game status equal what a from-scratch evaluation of the cells gives.
pub struct CachedOutcomesInvariant;

impl Invariant<GameState> for CachedOutcomesInvariant {
    fn holds(game: &GameState) -> bool {
        let fresh = MetaBoard::from_cells(game.board().cells());
        fresh.outcomes() == game.board().outcomes()
            && fresh.outcome() == game.board().outcome()
            && GameStatus::from(fresh.outcome()) == game.status()
    }

    fn description() -> &'static str {
        "Cached outcomes match recomputation from cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::x_wins_top_left;

    #[test]
    fn test_holds_after_sub_board_win() {
        assert!(CachedOutcomesInvariant::holds(&x_wins_top_left()));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut game = x_wins_top_left();
        game.status = GameStatus::Drawn;
        assert!(!CachedOutcomesInvariant::holds(&game));
    }
}
