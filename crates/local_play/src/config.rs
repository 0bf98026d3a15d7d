//! Driver configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use chess_rules::Glyphs;

/// Settings for a console game. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Piece symbols used when drawing the board
    pub glyphs: Glyphs,
    /// Draw the board from the side of the player about to move
    pub rotate_board: bool,
    /// `tracing` filter directive; `RUST_LOG` takes precedence when set
    pub log_filter: String,
    /// Write a JSON transcript here when the game ends
    pub record_path: Option<PathBuf>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::Unicode,
            rotate_board: true,
            log_filter: "warn".to_string(),
            record_path: None,
        }
    }
}

impl PlayConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
