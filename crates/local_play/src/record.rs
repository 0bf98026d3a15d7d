//! Game transcript storage

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use chess_rules::TerminalState;

/// Accepted move tokens in play order, and how the game ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// `None` while the game is still running or if it was abandoned
    pub result: Option<TerminalState>,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &str) {
        self.moves.push(token.to_string());
    }

    pub fn finish(&mut self, state: TerminalState) {
        self.result = Some(state);
    }

    /// Save record to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize record")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load record from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
