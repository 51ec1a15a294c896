//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::CameraAction`] and buffers them per frame in a
//! fixed-capacity queue.

pub mod map;
pub mod queue;

pub use tui_raycaster_types as types;

pub use map::{handle_key_event, should_quit};
pub use queue::{ActionQueue, KeyOutcome};
