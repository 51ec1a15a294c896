//! `tracing` subscriber setup.
//!
//! Stdout carries frames, so logs go to a file or to stderr. The level comes
//! from the explicit option, then `RUST_LOG`, then `warn`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Filter for the given explicit level, falling back to `RUST_LOG`, then `warn`.
pub fn env_filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Install the global subscriber.
///
/// With `log_file` set, events are appended to that file without ANSI colors.
/// Otherwise they go to stderr, but only when `stderr_enabled` is true; the
/// interactive binary passes `false` unless a level was asked for, because
/// stderr would draw over the frame.
pub fn init(level: Option<LogLevel>, log_file: Option<&Path>, stderr_enabled: bool) -> Result<()> {
    let filter = env_filter(level);

    if let Some(path) = log_file {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow!(e))?;
    } else if stderr_enabled {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e))?;
    }
    Ok(())
}
