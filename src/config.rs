//! Top-level application configuration.
//!
//! Configuration is read from YAML and includes:
//! - The seed board shown at startup
//! - Fixed layout geometry used to predict drop placeholders

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Extent, LayoutMeasure, List, Padding};
use crate::error::{BoardError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CORKBOARD_CONFIG";

/// Config file looked up in the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "corkboard.yaml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Lists the board starts with
    #[serde(default = "default_lists")]
    pub lists: Vec<SeedList>,

    /// Geometry for placeholder prediction
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// A list in the seed board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedList {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<String>,
}

/// Rendered sizes, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f64,
    pub card_height: f64,
    pub card_margin_bottom: f64,
    pub list_width: f64,
    pub list_padding_top: f64,
    pub list_padding_left: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            card_width: 256.0,
            card_height: 48.0,
            card_margin_bottom: 8.0,
            list_width: 288.0,
            list_padding_top: 8.0,
            list_padding_left: 16.0,
        }
    }
}

impl LayoutConfig {
    /// A measurer that reports this fixed geometry for every element
    pub fn measure(&self) -> LayoutMeasure {
        LayoutMeasure {
            card: Extent {
                width: self.card_width,
                height: self.card_height,
                margin_bottom: self.card_margin_bottom,
            },
            list: Extent {
                width: self.list_width,
                height: 0.0,
                margin_bottom: 0.0,
            },
            padding: Padding {
                top: self.list_padding_top,
                left: self.list_padding_left,
            },
        }
    }
}

fn seed(title: &str, cards: &[&str]) -> SeedList {
    SeedList {
        title: title.to_string(),
        cards: cards.iter().map(|c| c.to_string()).collect(),
    }
}

fn default_lists() -> Vec<SeedList> {
    vec![
        seed(
            "to do",
            &["add sprites", "implement main menu", "add sounds"],
        ),
        seed(
            "in progress",
            &[
                "write story",
                "add levels",
                "send demo to friends",
                "marketing",
            ],
        ),
        seed("done", &["implement player movement"]),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lists: default_lists(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Config {
    /// Resolve which config file to read
    ///
    /// An explicit path wins, then `CORKBOARD_CONFIG`, then `corkboard.yaml`
    /// in the working directory.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load configuration from file, or return default if not found
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::config_path(explicit);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Build the starting board, assigning fresh ids to every list and card
    pub fn seed_board(&self) -> Board {
        Board::from_lists(
            self.lists
                .iter()
                .map(|l| List::new(l.title.clone()).with_cards(l.cards.iter().cloned())),
        )
    }
}
