//! Diagnostic logging to disk.
//!
//! The terminal is in the alternate screen while the carousel runs, so log
//! output never goes to stdout. When enabled, events are written to a daily
//! file `herocarousel_<date>.log` in the configured log directory (default:
//! `~/.local/share/herocarousel/logs/`).

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the global `tracing` subscriber. No-op if logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let filepath = log_dir.join(format!("herocarousel_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .with_context(|| format!("Failed to open log file {}", filepath.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %filepath.display(), "logging started");
    Ok(())
}

/// Parse a level name, falling back to `info` for anything unrecognised.
fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => Path::new(path).to_path_buf(),
    }
}
