//! Loading arena configuration from disk and running series.

use std::io::Write;
use strictly_arena::{ArenaConfig, PlayerConfig, StrategyKind, run_series};
use strictly_ultimate::{Evaluation, Symbol};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config_from_file() {
    let file = write_config(
        r#"
games = 3

[x]
name = "searcher"
strategy = "minimax"
depth = 1
node_budget = 5000
time_limit_ms = 250
evaluation = "negamax"

[o]
strategy = "random"
seed = 42
"#,
    );

    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.games(), 3);

    let x = config.player(Symbol::X);
    assert_eq!(x.display_name(Symbol::X), "searcher");
    assert_eq!(*x.strategy(), StrategyKind::Minimax);
    assert_eq!(*x.depth(), 1);
    assert_eq!(*x.node_budget(), Some(5000));
    assert_eq!(*x.time_limit_ms(), Some(250));
    assert_eq!(*x.evaluation(), Evaluation::Negamax);

    let o = config.player(Symbol::O);
    assert_eq!(*o.strategy(), StrategyKind::Random);
    assert_eq!(*o.seed(), Some(42));
    assert_eq!(o.display_name(Symbol::O), "random (O)");
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = ArenaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("games = \"many\"\n");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_series_tallies_every_game() {
    let config = ArenaConfig::new(
        4,
        PlayerConfig::new(StrategyKind::Random).with_seed(1),
        PlayerConfig::new(StrategyKind::Random).with_seed(2),
    );
    let summary = run_series(&config).unwrap();
    assert_eq!(summary.total(), 4);
}

#[test]
fn test_search_beats_first_available() {
    let config = ArenaConfig::new(
        1,
        PlayerConfig::new(StrategyKind::Minimax).with_depth(2),
        PlayerConfig::new(StrategyKind::First),
    );
    let summary = run_series(&config).unwrap();
    assert_eq!(*summary.x_wins(), 1);
}
