//! TerminalRenderer: owns the terminal session and flushes presented frames.
//!
//! Frames are encoded into a reusable byte buffer first and written to stdout
//! in one call, so a frame never appears half-drawn.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::fb::FrameBuffer;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.active = true;
        debug!("terminal session entered");
        Ok(())
    }

    /// Undo everything `enter` did. Safe to call when not entered.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.active = false;
        debug!("terminal session restored");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Present `fb` (clear, swap, emit) and flush it to stdout.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        fb.present(&mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_without_enter_is_a_noop() {
        let mut term = TerminalRenderer::new();
        assert!(!term.is_active());
        term.exit().unwrap();
        assert!(!term.is_active());
    }

    #[test]
    fn present_emits_clear_then_bordered_frame() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_pixel(1, 1, 100);

        let mut out = Vec::new();
        fb.present(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // ESC[2J clears, ESC[1;1H homes the cursor.
        assert!(text.starts_with("\x1b[2J\x1b[1;1H"));
        assert!(text.contains("█ @ █"));
    }
}
