//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use strictly_ultimate::{Evaluation, Symbol};

/// Strictly Arena - ultimate tic-tac-toe against search engines
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Play ultimate tic-tac-toe or pit strategies against each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a series of AI-vs-AI games
    Series {
        /// Path to arena configuration file
        #[arg(short, long, default_value = "arena.toml")]
        config: std::path::PathBuf,

        /// Override the number of games
        #[arg(short, long)]
        games: Option<u32>,
    },

    /// Play against the minimax engine in the terminal
    Play {
        /// Search depth of the engine
        #[arg(short, long, default_value = "2")]
        depth: u32,

        /// Symbol the human plays (x moves first)
        #[arg(long, default_value = "x")]
        human: Symbol,

        /// Evaluation formulation of the engine
        #[arg(long, default_value = "material")]
        evaluation: Evaluation,
    },
}
