//! Configuration file loading for the Ataxx tools.
//!
//! Settings live in `ataxx.toml`:
//!
//! ```toml
//! layout = 2
//! games = 10
//!
//! [yellow]
//! algorithm = "minimax"
//! iterations = 3
//!
//! [red]
//! algorithm = "random"
//!
//! [[layouts]]
//! id = 3
//! name = "Centre Block"
//! placement = "x5o/7/7/3-3/7/7/o5x"
//! ```

use ataxx_core::{NotationError, Side};
use ataxx_engine::{Algorithm, Board, BotMoveRequest, LayoutError, LayoutId, LayoutRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or applying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A custom layout could not be registered.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A custom layout has a malformed placement string.
    #[error("invalid placement for layout {id}: {source}")]
    Notation {
        id: LayoutId,
        #[source]
        source: NotationError,
    },
}

/// Bot settings for one side.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SideSettings {
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Simulations for MCTS, search depth for minimax. Defaults to 100.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_iterations() -> u32 {
    100
}

impl Default for SideSettings {
    fn default() -> Self {
        SideSettings {
            algorithm: Algorithm::default(),
            iterations: default_iterations(),
        }
    }
}

/// A layout defined in the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub id: LayoutId,
    pub name: String,
    pub placement: String,
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AtaxxConfig {
    /// Layout used when a command does not name one. Defaults to 1.
    #[serde(default = "default_layout")]
    pub layout: LayoutId,
    /// Games per self-play series. Defaults to 1.
    #[serde(default = "default_games")]
    pub games: u32,
    #[serde(default)]
    pub yellow: SideSettings,
    #[serde(default)]
    pub red: SideSettings,
    /// Extra layouts registered alongside the built-in ones.
    #[serde(default)]
    pub layouts: Vec<LayoutConfig>,
}

fn default_layout() -> LayoutId {
    1
}

fn default_games() -> u32 {
    1
}

impl Default for AtaxxConfig {
    fn default() -> Self {
        AtaxxConfig {
            layout: default_layout(),
            games: default_games(),
            yellow: SideSettings::default(),
            red: SideSettings::default(),
            layouts: Vec::new(),
        }
    }
}

impl AtaxxConfig {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `ataxx.toml` in the current
    /// directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("ataxx.toml")
    }

    pub fn for_side(&self, side: Side) -> &SideSettings {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }

    /// Builds a registry holding the built-in layouts plus the configured ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Notation`] for a malformed placement and
    /// [`ConfigError::Layout`] if an id is already taken.
    pub fn registry(&self) -> Result<LayoutRegistry, ConfigError> {
        let mut registry = LayoutRegistry::builtin();
        for layout in &self.layouts {
            let board = Board::from_notation(&layout.placement).map_err(|source| {
                ConfigError::Notation {
                    id: layout.id,
                    source,
                }
            })?;
            registry.register(layout.id, layout.name.as_str(), board)?;
        }
        Ok(registry)
    }

    /// Builds the bot request for `side` to move on `board`.
    pub fn request(&self, board: Board, side: Side) -> BotMoveRequest {
        let settings = self.for_side(side);
        BotMoveRequest::new(board, side).with_algorithm(settings.algorithm, settings.iterations)
    }
}
