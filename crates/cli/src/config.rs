//! Configuration file for the CLI

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Built-in controller endpoint used when neither the flag, the env var,
/// nor the config file names one.
pub const DEFAULT_API_URL: &str = "https://api.controller.example.com";

/// CLI configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Controller API URL
    pub api_url: Option<String>,
    /// Default chart height in rows
    pub default_height: Option<u32>,
}

impl Config {
    /// Load configuration from file; a missing file is an empty config.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        serde_json::from_str(&content).context("Failed to parse config file")
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("capgraph").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{"api_url": "https://controller.local"}"#).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://controller.local"));
        assert!(config.default_height.is_none());
    }
}
