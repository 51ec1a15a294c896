//! TUI raycaster (workspace facade crate).
//!
//! Re-exports the focused crates under `crates/` as
//! `tui_raycaster::{core, engine, input, term, types}` and adds the
//! command-line and logging setup shared by the binaries.

pub mod cli;
pub mod logging;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
