//! Strictly Arena - drivers for ultimate tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: TOML-described players and series
//! - **Series**: AI-vs-AI games with a win/draw tally
//! - **Console**: a human playing a strategy over text streams

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod series;

pub use config::{ArenaConfig, ConfigError, PlayerConfig, StrategyKind};
pub use console::ConsoleGame;
pub use series::{GameRecord, SeriesSummary, play_game, run_series};
