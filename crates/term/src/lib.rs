//! Terminal output module.
//!
//! A small, frame-oriented rendering layer. It avoids widget/layout libraries
//! and instead keeps a double-buffered grid of glyphs that is presented to the
//! terminal in one write per frame.
//!
//! - [`fb`]: the double-buffered [`FrameBuffer`] and brightness quantization
//! - [`renderer`]: [`TerminalRenderer`], raw-mode session and stdout flushing

pub mod fb;
pub mod renderer;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::{encode_front_into, glyph_for, FrameBuffer};
pub use renderer::TerminalRenderer;
