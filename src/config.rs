//! Configuration - where the wallet platform lives
//!
//! Resolution order: `WALLETDECK_API_URL` env var, then
//! `~/.walletdeck/config.yaml`, then the built-in default. Missing or
//! malformed config never prevents startup.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, DEFAULT_API_URL};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the wallet-platform API, no trailing slash
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults on any problem
    pub fn load() -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return Config {
                    base_url: url.trim().trim_end_matches('/').to_string(),
                };
            }
        }

        config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Persist the current configuration
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_yaml::to_string(self)?)?;
        }
        Ok(())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".walletdeck").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: https://wallets.example.com/api/\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://wallets.example.com/api");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, ": not yaml [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(Config::default().base_url, DEFAULT_API_URL);
    }
}
