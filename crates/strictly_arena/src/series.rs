//! AI-vs-AI games and series.

use crate::ArenaConfig;
use derive_getters::Getters;
use derive_more::Display;
use strictly_ultimate::{GameState, GameStatus, MoveStrategy, SearchError, Symbol, select_move};
use tracing::{debug, info, instrument};

/// A finished game.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct GameRecord {
    /// Final state, history included.
    state: GameState,
}

impl GameRecord {
    /// How the game ended.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Number of moves played.
    pub fn moves(&self) -> usize {
        self.state.history().len()
    }
}

/// Win/draw tally over a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Display)]
#[display("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws)]
pub struct SeriesSummary {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl SeriesSummary {
    /// Adds one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Symbol::X) => self.x_wins += 1,
            GameStatus::Won(Symbol::O) => self.o_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total games recorded.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game to completion between two strategies.
#[instrument(skip_all, fields(x = player_x.name(), o = player_o.name()))]
pub fn play_game<'a>(
    player_x: &'a mut dyn MoveStrategy,
    player_o: &'a mut dyn MoveStrategy,
) -> Result<GameRecord, SearchError> {
    let mut game = GameState::new();

    while !game.is_over() {
        let player = match game.mover() {
            Symbol::X => &mut *player_x,
            Symbol::O => &mut *player_o,
        };
        let mv = select_move(&game, player)?;
        debug!(mover = %game.mover(), %mv, "Move made");
        game.apply_move(mv)
            .map_err(|reason| SearchError::IllegalSuggestion { mv, reason })?;
    }

    info!(status = %game.status(), moves = game.history().len(), "Game finished");
    Ok(GameRecord::new(game))
}

/// Plays every game of a configured series.
///
/// Strategies are built once, so seeded random players continue their
/// sequence from one game to the next.
#[instrument(skip(config), fields(games = config.games()))]
pub fn run_series(config: &ArenaConfig) -> Result<SeriesSummary, SearchError> {
    let mut player_x = config.player(Symbol::X).build(Symbol::X);
    let mut player_o = config.player(Symbol::O).build(Symbol::O);
    let mut summary = SeriesSummary::default();

    for game in 1..=*config.games() {
        let record = play_game(player_x.as_mut(), player_o.as_mut())?;
        info!(game, status = %record.status(), moves = record.moves(), "Series game complete");
        summary.record(record.status());
    }

    info!(%summary, "Series complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_ultimate::FirstAvailable;

    #[test]
    fn test_first_available_mirror_match_is_deterministic() {
        let mut x = FirstAvailable::new("x");
        let mut o = FirstAvailable::new("o");
        let first = play_game(&mut x, &mut o).unwrap();
        let second = play_game(&mut x, &mut o).unwrap();
        assert!(first.status().is_over());
        assert_eq!(first.state().history(), second.state().history());
    }

    #[test]
    fn test_mixed_strategies_play_to_completion() {
        let mut x = strictly_ultimate::RandomStrategy::new("random", Some(3));
        let mut o = FirstAvailable::new("first");
        let record = play_game(&mut x, &mut o).unwrap();
        assert!(record.status().is_over());
        assert_eq!(record.moves(), record.state().history().len());
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SeriesSummary::default();
        summary.record(GameStatus::Won(Symbol::O));
        summary.record(GameStatus::Drawn);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.to_string(), "X wins: 0, O wins: 1, draws: 1");
    }
}
