//! Command-line configuration for the interactive binary.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::types::{CameraAction, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frame width must be at least 1 column")]
    ZeroWidth,
    #[error("frame height must be at least 1 row")]
    ZeroHeight,
    #[error("frame rate must be at least 1 fps")]
    ZeroFps,
}

#[derive(Debug, Parser)]
#[command(name = "tui-raycaster")]
#[command(version)]
#[command(about = "Render a shaded sphere as ASCII art in the terminal")]
#[command(long_about = "
Renders a single sphere, lit by a sky light, as ASCII characters.

Controls:
  q / e     yaw right / left
  [ / ]     pitch down / up
  ; / '     roll left / right
  w / s     move forward / backward
  a / d     strafe left / right
  r / f     ascend / descend
  Esc       quit
")]
pub struct Cli {
    /// Frame width in character cells
    #[arg(default_value_t = DEFAULT_WIDTH)]
    pub width: u16,

    /// Frame height in character cells
    #[arg(default_value_t = DEFAULT_HEIGHT)]
    pub height: u16,

    /// Frame rate cap
    #[arg(default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Trace pixels on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub width: u16,
    pub height: u16,
    pub fps: u32,
    pub parallel: bool,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(RunConfig {
            width: self.width,
            height: self.height,
            fps: self.fps,
            parallel: self.parallel,
            log_level: self.log_level,
            log_file: self.log_file,
        })
    }
}

/// clap value parser for camera action names such as `yawRight`.
pub fn parse_action(name: &str) -> Result<CameraAction, String> {
    CameraAction::from_str(name).ok_or_else(|| {
        let known: Vec<&str> = CameraAction::ALL.iter().map(|a| a.as_str()).collect();
        format!("unknown action `{}`, expected one of: {}", name, known.join(", "))
    })
}
