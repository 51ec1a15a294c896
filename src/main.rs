//! Interactive raycaster (default binary).
//!
//! Renders the default scene into the terminal at a capped frame rate. Keys
//! pressed while a frame is waited out are queued and applied before the next
//! render.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info, warn};

use tui_raycaster::cli::{Cli, RunConfig};
use tui_raycaster::core::{Scene, SceneRenderer};
use tui_raycaster::engine::{Engine, FrameLimiter};
use tui_raycaster::input::{ActionQueue, KeyOutcome};
use tui_raycaster::logging;
use tui_raycaster::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    logging::init(
        config.log_level,
        config.log_file.as_deref(),
        config.log_level.is_some(),
    )?;
    info!(
        width = config.width,
        height = config.height,
        fps = config.fps,
        parallel = config.parallel,
        "starting raycaster"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let renderer = SceneRenderer::new(Scene::default()).with_parallel(config.parallel);
    let mut engine = Engine::new(config.width, config.height, renderer);
    let mut limiter = FrameLimiter::new(config.fps);
    let mut queue = ActionQueue::new();

    loop {
        let started = Instant::now();
        engine.apply_all(queue.drain());
        engine.step(term)?;

        // Input with timeout until the frame budget is spent.
        let deadline = Instant::now() + limiter.finish_frame(started.elapsed());
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match queue.handle_key(key) {
                    KeyOutcome::Quit => {
                        info!(
                            frames = engine.frames(),
                            overruns = limiter.overruns(),
                            "quit requested"
                        );
                        return Ok(());
                    }
                    KeyOutcome::Dropped(action) => {
                        debug!(action = action.as_str(), "action queue full");
                    }
                    KeyOutcome::Queued(_) | KeyOutcome::Ignored => {}
                }
            }
        }
    }
}
