//! Strictly Arena - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use strictly_arena::{ArenaConfig, ConsoleGame, run_series};
use strictly_ultimate::{Evaluation, MinimaxStrategy, Symbol};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Series { config, games } => run_series_command(config, games),
        Command::Play {
            depth,
            human,
            evaluation,
        } => run_play_command(depth, human, evaluation),
    }
}

/// Run a configured AI-vs-AI series
#[instrument]
fn run_series_command(path: PathBuf, games: Option<u32>) -> Result<()> {
    let mut config = ArenaConfig::from_file(&path)
        .with_context(|| format!("Loading {}", path.display()))?;
    if let Some(games) = games {
        config = config.with_games(games);
    }

    let summary = run_series(&config)?;
    println!("{}", summary);
    Ok(())
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play_command(depth: u32, human: Symbol, evaluation: Evaluation) -> Result<()> {
    info!("Starting console game");
    let engine = MinimaxStrategy::new(format!("minimax (depth {})", depth), depth)
        .with_evaluation(evaluation);

    let stdin = io::stdin();
    let mut console = ConsoleGame::new(human, Box::new(engine), stdin.lock(), io::stdout());
    let status = console.run()?;
    info!(%status, "Game over");
    Ok(())
}
