//! Frame loop building blocks.
//!
//! [`Engine`] runs one frame (`clear → render → present`) over an owned
//! camera, scene renderer, and frame buffer. [`FrameLimiter`] turns a target
//! frame rate into a per-frame wait. Neither polls input or sleeps; the binary
//! wires them to the terminal.

pub mod frame;
pub mod limiter;

pub use tui_raycaster_core as core;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;

pub use frame::Engine;
pub use limiter::FrameLimiter;
