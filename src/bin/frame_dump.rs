//! Headless frame dump.
//!
//! Renders frames of the default scene to stdout as plain bordered text, with
//! no raw mode and no escape sequences. Handy for eyeballing the shading and
//! for diffing output between changes.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tui_raycaster::cli::{parse_action, ConfigError, LogLevel};
use tui_raycaster::core::{Scene, SceneRenderer, Vector3};
use tui_raycaster::engine::Engine;
use tui_raycaster::logging;
use tui_raycaster::types::{CameraAction, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "frame-dump")]
#[command(about = "Render raycaster frames to stdout without a terminal session")]
struct Args {
    /// Frame width in character cells
    #[arg(default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Frame height in character cells
    #[arg(default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = 1)]
    frames: u32,

    /// Yaw added to the camera after each frame, in radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    yaw_step: f32,

    /// Camera action applied between frames, e.g. `yawRight` (repeatable)
    #[arg(short, long = "action", value_name = "ACTION", value_parser = parse_action)]
    actions: Vec<CameraAction>,

    /// Trace pixels on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Leave out the debug text row
    #[arg(long)]
    no_debug: bool,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.width == 0 {
        return Err(ConfigError::ZeroWidth.into());
    }
    if args.height == 0 {
        return Err(ConfigError::ZeroHeight.into());
    }
    logging::init(args.log_level, None, true)?;

    let renderer = SceneRenderer::new(Scene::default())
        .with_parallel(args.parallel)
        .with_debug_overlay(!args.no_debug);
    let mut engine = Engine::new(args.width, args.height, renderer);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in 0..args.frames {
        if frame > 0 {
            writeln!(out)?;
            engine
                .camera_mut()
                .rotate(Vector3::new(0.0, args.yaw_step, 0.0));
            engine.apply_all(args.actions.iter().copied());
        }
        engine.step_plain(&mut out)?;
    }
    out.flush()?;

    info!(frames = engine.frames(), "frames dumped");
    Ok(())
}
