use std::path::Path;

use crate::ai::{Agent, Difficulty, MinimaxAgent, NegascoutAgent, RandomAgent};
use crate::error::ConfigError;
use crate::game::IdAllocator;

/// Which search strategy an agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Minimax,
    Negascout,
    Random,
}

/// One agent's settings.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub strategy: StrategyKind,
    pub depth: u32,
    pub difficulty: Difficulty,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            strategy: StrategyKind::Minimax,
            depth: 4,
            difficulty: Difficulty::Hard,
        }
    }
}

impl AgentConfig {
    /// Construct the configured agent, drawing its identity from `ids`.
    pub fn build(&self, ids: &IdAllocator) -> Box<dyn Agent> {
        match self.strategy {
            StrategyKind::Minimax => Box::new(MinimaxAgent::new(ids)),
            StrategyKind::Negascout => Box::new(NegascoutAgent::new(ids)),
            StrategyKind::Random => Box::new(RandomAgent::new(ids)),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first: AgentConfig,
    pub second: AgentConfig,
    pub games: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            first: AgentConfig::default(),
            second: AgentConfig {
                strategy: StrategyKind::Negascout,
                ..AgentConfig::default()
            },
            games: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.depth == 0 {
            return Err(ConfigError::Validation("first.depth must be >= 1".into()));
        }
        if self.second.depth == 0 {
            return Err(ConfigError::Validation("second.depth must be >= 1".into()));
        }
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be >= 1".into()));
        }
        Ok(())
    }
}
