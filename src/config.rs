//! User configuration
//!
//! Read from `$HOME/.gh-explorer/config.json`. Every field is optional in the
//! file; missing fields take their defaults.

use crate::services::debounce::DEFAULT_QUIET_PERIOD;
use crate::services::github::DEFAULT_API_BASE_URL;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding `log_level`
pub const LOG_ENV_VAR: &str = "GH_EXPLORER_LOG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub API origin (GitHub Enterprise installs use `https://host/api/v3`)
    pub api_base_url: String,
    /// Quiet period after the last keystroke before searching
    pub debounce_ms: u64,
    /// Per-request timeout; a timed out request shows up as a network error
    pub request_timeout_secs: u64,
    /// `tracing` filter directive, e.g. "info" or "gh_explorer=debug"
    pub log_level: String,
    /// UI tick interval, which bounds how quickly results are picked up
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_QUIET_PERIOD.as_millis() as u64,
            request_timeout_secs: 15,
            log_level: "info".to_string(),
            tick_rate_ms: 50,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".gh-explorer"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::from_json(&contents)
    }

    /// Load the config file, or defaults if it is missing or unreadable
    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    fn from_json(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Filter directive, with the environment taking precedence
    pub fn log_filter(&self) -> String {
        env::var(LOG_ENV_VAR)
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| self.log_level.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_json(r#"{"debounce_ms": 500}"#).unwrap();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_file_is_ignored() {
        assert!(Config::from_json("{ not json").is_none());
    }

    #[test]
    fn test_tick_rate_is_never_zero() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
