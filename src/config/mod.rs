// AdInsights - GPL-3.0-or-later
// This file is part of AdInsights.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// AdInsights is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// AdInsights is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with AdInsights.  If not, see <https://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_WORD_PREVIEW_LIMIT: usize = 5;

/// Global user configuration stored in config directory
///
/// Query state (filters, sort order) is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Base URL of the analysis backend
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// How many unique words to show per top user before "+N more"
    #[serde(default = "default_word_preview_limit")]
    pub word_preview_limit: usize,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

const fn default_word_preview_limit() -> usize {
    DEFAULT_WORD_PREVIEW_LIMIT
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            word_preview_limit: DEFAULT_WORD_PREVIEW_LIMIT,
        }
    }
}

impl GlobalConfig {
    /// Get the path to the global config file
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("adinsights").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found
    #[must_use]
    pub fn load() -> Self {
        Self::config_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load config from `path`, falling back to defaults on any problem
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No global config found, using defaults");
            return Self::default();
        }

        tracing::info!("Loading global config from {path:?}");
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Cannot read config file: {e}");
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(config) => {
                tracing::info!("Using backend at {}", config.api_base);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed config file: {e}");
                Self::default()
            }
        }
    }

    /// Save global config to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {e}"))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write config file: {e}"))?;

        tracing::info!("Saved global config to {path:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = GlobalConfig {
            api_base: "http://backend:9000".to_string(),
            word_preview_limit: 8,
        };
        config.save_to(&path).unwrap();
        assert_eq!(GlobalConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base": "http://x"}"#).unwrap();
        let config = GlobalConfig::load_from(&path);
        assert_eq!(config.api_base, "http://x");
        assert_eq!(config.word_preview_limit, DEFAULT_WORD_PREVIEW_LIMIT);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());
    }
}
