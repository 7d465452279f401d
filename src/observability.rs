//! Tracing initialization
//!
//! The terminal belongs to the UI, so logs go to
//! `$HOME/.gh-explorer/gh-explorer.log` instead of stdout/stderr.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Silently does nothing if the log file cannot be opened; logging is
/// optional. Safe to call more than once (only the first call takes effect).
pub fn init_tracing(config: &Config) {
    let Some(log_dir) = Config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gh-explorer.log"))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
