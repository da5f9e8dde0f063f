use crate::error::{MarkpostError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// User-agent string for link analysis requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Number of links fetched concurrently by `analyze`
    #[serde(default = "default_analyze_workers")]
    pub analyze_workers: usize,

    /// Per-link timeout for `analyze`, in seconds
    #[serde(default = "default_analyze_timeout_secs")]
    pub analyze_timeout_secs: u64,

    /// Whether alerts wait for a key press on an interactive terminal
    #[serde(default = "default_wait_for_key")]
    pub wait_for_key: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            analyze_workers: default_analyze_workers(),
            analyze_timeout_secs: default_analyze_timeout_secs(),
            wait_for_key: default_wait_for_key(),
        }
    }
}

fn default_user_agent() -> String {
    concat!("markpost/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_analyze_workers() -> usize {
    10
}

fn default_analyze_timeout_secs() -> u64 {
    5
}

fn default_wait_for_key() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/markpost/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load config from {:?}: {}; using default configuration",
                    config_path,
                    e
                );
                Self::default()
            }
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.analyze_workers == 0 {
            return Err(MarkpostError::Config(
                "analyze_workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
