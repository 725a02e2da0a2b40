//! Properties that must hold over arbitrary sequences of legal moves.

use strictly_ultimate::rules::{legal_move, line_winner};
use strictly_ultimate::{
    GameSnapshot, GameState, Move, MoveStrategy, Outcome, Position, RandomStrategy, RuleError,
    select_move,
};

const SEEDS: u64 = 40;

/// Plays a random game, calling `check` after every move.
fn random_game(seed: u64, mut check: impl FnMut(&GameState, Move)) -> GameState {
    let mut strategy = RandomStrategy::new("random", Some(seed));
    let mut game = GameState::new();
    while !game.is_over() {
        let mv = select_move(&game, &mut strategy).unwrap();
        game.apply_move(mv).unwrap();
        check(&game, mv);
    }
    game
}

#[test]
fn test_pointer_follows_played_cell_unless_decided() {
    for seed in 0..SEEDS {
        random_game(seed, |game, mv| {
            if game.is_over() {
                return;
            }
            let target_decided = game.board().sub_board(mv.cell).outcome().is_decided();
            let expected = (!target_decided).then_some(mv.cell);
            assert_eq!(game.mandatory(), expected, "seed {seed}, move {mv}");
        });
    }
}

#[test]
fn test_decided_sub_boards_stay_closed() {
    for seed in 0..SEEDS {
        let mut decided: Vec<(Position, Outcome)> = Vec::new();
        random_game(seed, |game, _| {
            for (pos, outcome) in &decided {
                assert_eq!(game.board().sub_board(*pos).outcome(), *outcome);
            }
            for pos in Position::ALL {
                let outcome = game.board().sub_board(pos).outcome();
                if !outcome.is_decided() {
                    continue;
                }
                if !decided.iter().any(|(p, _)| *p == pos) {
                    decided.push((pos, outcome));
                }
                for cell in Position::ALL {
                    assert_eq!(
                        legal_move(game.board(), None, Move::new(pos, cell)),
                        Err(RuleError::SubBoardAlreadyDecided(pos))
                    );
                }
                assert!(game.legal_moves().iter().all(|mv| mv.sub_board != pos));
            }
        });
    }
}

#[test]
fn test_meta_won_iff_owned_line() {
    for seed in 0..SEEDS {
        random_game(seed, |game, _| {
            let line = line_winner(&game.board().ownership());
            assert_eq!(game.board().outcome().winner(), line, "seed {seed}");
            assert_eq!(game.status().winner(), line);
        });
    }
}

#[test]
fn test_snapshot_round_trip_reproduces_outcomes() {
    for seed in 0..10 {
        let mut games = Vec::new();
        random_game(seed, |game, _| {
            if game.history().len() % 7 == 0 || game.is_over() {
                games.push(game.clone());
            }
        });

        for game in games {
            let json = serde_json::to_string(&GameSnapshot::from(&game)).unwrap();
            let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();

            let board = snapshot.meta_board();
            assert_eq!(board.outcomes(), game.board().outcomes());
            assert_eq!(board.outcome(), game.board().outcome());
            assert_eq!(GameState::try_from(snapshot).unwrap(), game);
        }
    }
}

#[test]
fn test_random_strategy_returns_only_legal_move() {
    let mut found = 0;
    for seed in 0..SEEDS {
        let mut forced = Vec::new();
        random_game(seed, |game, _| {
            if game.legal_moves().len() == 1 {
                forced.push(game.clone());
            }
        });

        for game in forced {
            let only = game.legal_moves()[0];
            for pick_seed in 0..5 {
                let mut strategy = RandomStrategy::new("random", Some(pick_seed));
                assert_eq!(strategy.select_move(&game), Ok(only));
            }
            found += 1;
        }
    }
    assert!(found > 0, "no position with a single legal move was reached");
}

#[test]
fn test_finished_games_reject_further_moves() {
    for seed in 0..SEEDS {
        let mut game = random_game(seed, |_, _| {});
        let before = game.clone();
        for sub_board in Position::ALL {
            for cell in Position::ALL {
                assert_eq!(game.apply_move(Move::new(sub_board, cell)), Err(RuleError::GameOver));
            }
        }
        assert_eq!(game, before);
        assert!(game.legal_moves().is_empty());
    }
}
