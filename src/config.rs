//! Application configuration management.
//!
//! This module handles loading and saving the configuration, which holds
//! the auth service base URL and the last email used to sign in.
//!
//! Configuration is stored at `~/.config/stagepass/config.json`. The
//! base URL can be overridden through the `STAGEPASS_AUTH_URL`
//! environment variable, which always wins over the file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "stagepass";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the auth service base URL
pub const AUTH_URL_ENV: &str = "STAGEPASS_AUTH_URL";

/// Default base URL for the hosted auth service
pub const DEFAULT_AUTH_BASE_URL: &str = "https://stagepass.events/api/auth";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub auth_base_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the auth service base URL: environment override first,
    /// then the config file, then the hosted default.
    pub fn auth_base_url(&self) -> String {
        if let Ok(url) = std::env::var(AUTH_URL_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.auth_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_falls_back_to_default() {
        // Only valid while the override variable is unset
        if std::env::var(AUTH_URL_ENV).is_ok() {
            return;
        }
        let config = Config::default();
        assert_eq!(config.auth_base_url(), DEFAULT_AUTH_BASE_URL);
    }

    #[test]
    fn test_base_url_prefers_config_value() {
        if std::env::var(AUTH_URL_ENV).is_ok() {
            return;
        }
        let config = Config {
            auth_base_url: Some("http://localhost:3000/api/auth".to_string()),
            last_email: None,
        };
        assert_eq!(config.auth_base_url(), "http://localhost:3000/api/auth");
    }
}
