//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_ultimate::{
    Evaluation, FirstAvailable, MinimaxStrategy, MoveStrategy, RandomStrategy, Symbol,
};
use tracing::{debug, info, instrument};

/// Which built-in strategy a player uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Uniformly random legal moves.
    Random,
    /// First legal move in enumeration order.
    First,
    /// Depth-bounded minimax search.
    #[default]
    Minimax,
}

/// Settings for one side of a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name. Defaults to the strategy name.
    #[serde(default)]
    name: Option<String>,

    /// Strategy to play with.
    #[serde(default)]
    strategy: StrategyKind,

    /// Search depth for `minimax`.
    #[serde(default = "default_depth")]
    depth: u32,

    /// Node budget per move for `minimax`.
    #[serde(default)]
    node_budget: Option<u64>,

    /// Time limit per move for `minimax`, in milliseconds.
    #[serde(default)]
    time_limit_ms: Option<u64>,

    /// Seed for `random`. Unseeded players draw from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Evaluation formulation for `minimax`.
    #[serde(default)]
    evaluation: Evaluation,
}

fn default_depth() -> u32 {
    2
}

fn default_games() -> u32 {
    10
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

impl PlayerConfig {
    /// Creates a player with default settings for `strategy`.
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            name: None,
            strategy,
            depth: default_depth(),
            node_budget: None,
            time_limit_ms: None,
            seed: None,
            evaluation: Evaluation::default(),
        }
    }

    /// Sets the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The name shown in logs and summaries.
    pub fn display_name(&self, symbol: Symbol) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{} ({})", self.strategy, symbol))
    }

    /// Builds the configured strategy for `symbol`.
    #[instrument(skip(self), fields(strategy = %self.strategy))]
    pub fn build(&self, symbol: Symbol) -> Box<dyn MoveStrategy> {
        let name = self.display_name(symbol);
        debug!(%name, "Building strategy");
        match self.strategy {
            StrategyKind::Random => Box::new(RandomStrategy::new(name, self.seed)),
            StrategyKind::First => Box::new(FirstAvailable::new(name)),
            StrategyKind::Minimax => {
                let mut strategy =
                    MinimaxStrategy::new(name, self.depth).with_evaluation(self.evaluation);
                if let Some(nodes) = self.node_budget {
                    strategy = strategy.with_node_budget(nodes);
                }
                if let Some(ms) = self.time_limit_ms {
                    strategy = strategy.with_time_limit(Duration::from_millis(ms));
                }
                Box::new(strategy)
            }
        }
    }
}

/// A series of AI-vs-AI games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// The player moving first.
    #[serde(default)]
    x: PlayerConfig,

    /// The player moving second.
    #[serde(default)]
    o: PlayerConfig,
}

impl ArenaConfig {
    /// Creates a configuration from two players.
    pub fn new(games: u32, x: PlayerConfig, o: PlayerConfig) -> Self {
        Self { games, x, o }
    }

    /// Overrides the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// The configuration of the player using `symbol`.
    pub fn player(&self, symbol: Symbol) -> &PlayerConfig {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(games = config.games, x = %config.x.strategy, o = %config.o.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(config)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(default_games(), PlayerConfig::default(), PlayerConfig::default())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = ArenaConfig::from_toml("[x]\nstrategy = \"random\"\n").unwrap();
        assert_eq!(*config.games(), 10);
        assert_eq!(*config.x().strategy(), StrategyKind::Random);
        assert_eq!(*config.o().strategy(), StrategyKind::Minimax);
        assert_eq!(*config.o().depth(), 2);
        assert_eq!(*config.o().evaluation(), Evaluation::Material);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = ArenaConfig::from_toml("[x]\nstrategy = \"alphazero\"\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_zero_games_rejected() {
        assert!(ArenaConfig::from_toml("games = 0\n").is_err());
    }

    #[test]
    fn test_build_names_strategy() {
        let strategy = PlayerConfig::new(StrategyKind::First).build(Symbol::O);
        assert_eq!(strategy.name(), "first (O)");
    }

    #[test]
    fn test_strategy_kind_parses() {
        assert_eq!("MINIMAX".parse::<StrategyKind>(), Ok(StrategyKind::Minimax));
    }
}
