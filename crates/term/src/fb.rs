//! Double-buffered character framebuffer.
//!
//! Two owned grids of glyphs; an index says which one is the front (last
//! presented) and which is the back (being written). `present` flips the index,
//! so swapping is O(1) and never copies or reseats references.
//!
//! Every cell always holds a glyph. Pixel writes quantize brightness through
//! the luminance ramp; character writes store the literal. Out-of-range writes
//! are ignored.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::PixelTarget;
use crate::types::{BORDER_CHAR, LUMINANCE_RAMP, MAX_BRIGHTNESS};

/// Glyph for a brightness value. Values outside `0..=100` are clamped first.
///
/// `ramp[brightness * (len - 1) / 100]` with integer floor division.
#[inline]
pub fn glyph_for(brightness: i32) -> char {
    let b = brightness.clamp(0, MAX_BRIGHTNESS) as usize;
    LUMINANCE_RAMP[b * (LUMINANCE_RAMP.len() - 1) / MAX_BRIGHTNESS as usize]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    grids: [Vec<char>; 2],
    front: usize,
}

impl FrameBuffer {
    /// Both grids start filled with the background glyph.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        let blank = glyph_for(0);
        Self {
            width,
            height,
            grids: [vec![blank; len], vec![blank; len]],
            front: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline(always)]
    fn back_index(&self) -> usize {
        self.front ^ 1
    }

    /// Fill the back buffer with the glyph for `brightness`.
    ///
    /// Skipping this between frames leaves the previous back buffer's content
    /// under any cells the next frame does not write.
    pub fn clear(&mut self, brightness: i32) {
        let glyph = glyph_for(brightness);
        let back = self.back_index();
        self.grids[back].fill(glyph);
    }

    /// Write the glyph for `brightness` (clamped to `0..=100`) at `(x, y)`.
    pub fn set_pixel(&mut self, x: u16, y: u16, brightness: i32) {
        self.set_char(x, y, glyph_for(brightness));
    }

    /// Write a literal character at `(x, y)`, bypassing quantization.
    pub fn set_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            let back = self.back_index();
            self.grids[back][i] = ch;
        }
    }

    /// Cell of the buffer being written.
    pub fn back_cell(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.grids[self.back_index()][i])
    }

    /// Cell of the last presented buffer.
    pub fn front_cell(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.grids[self.front][i])
    }

    /// Row `y` of the last presented buffer.
    pub fn front_row(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        Some(self.grids[self.front][start..end].iter().collect())
    }

    /// Flip front and back. The old front becomes the next write target.
    pub fn swap(&mut self) {
        self.front ^= 1;
    }

    /// Clear the terminal, swap buffers, and write the new front buffer to
    /// `out` inside a border of [`BORDER_CHAR`], one row per line.
    pub fn present<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
        self.swap();
        encode_front_into(self, out)?;
        out.flush()?;
        Ok(())
    }
}

impl PixelTarget for FrameBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_pixel(&mut self, x: u16, y: u16, brightness: i32) {
        FrameBuffer::set_pixel(self, x, y, brightness);
    }

    fn set_char(&mut self, x: u16, y: u16, ch: char) {
        FrameBuffer::set_char(self, x, y, ch);
    }
}

/// Write the front buffer, framed by the border, without any terminal control
/// sequences. Lines end in `\r\n` so output is correct in raw mode.
pub fn encode_front_into<W: Write + ?Sized>(fb: &FrameBuffer, out: &mut W) -> Result<()> {
    let edge: String = std::iter::repeat(BORDER_CHAR)
        .take(fb.width() as usize + 2)
        .collect();

    out.queue(Print(&edge))?;
    out.queue(Print("\r\n"))?;
    let mut line = String::with_capacity((fb.width() as usize + 2) * BORDER_CHAR.len_utf8());
    for y in 0..fb.height() {
        line.clear();
        line.push(BORDER_CHAR);
        line.extend(fb.front_row(y).unwrap_or_default().chars());
        line.push(BORDER_CHAR);
        out.queue(Print(&line))?;
        out.queue(Print("\r\n"))?;
    }
    out.queue(Print(&edge))?;
    out.queue(Print("\r\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_quantization_uses_floor_division() {
        assert_eq!(glyph_for(0), ' ');
        assert_eq!(glyph_for(11), ' ');
        assert_eq!(glyph_for(12), '.');
        assert_eq!(glyph_for(22), '.');
        assert_eq!(glyph_for(23), ':');
        assert_eq!(glyph_for(50), '=');
        assert_eq!(glyph_for(99), '%');
        assert_eq!(glyph_for(100), '@');
    }

    #[test]
    fn glyph_quantization_clamps() {
        assert_eq!(glyph_for(-40), ' ');
        assert_eq!(glyph_for(101), '@');
        assert_eq!(glyph_for(i32::MAX), '@');
    }

    #[test]
    fn new_buffer_is_blank() {
        let fb = FrameBuffer::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(fb.back_cell(x, y), Some(' '));
                assert_eq!(fb.front_cell(x, y), Some(' '));
            }
        }
    }

    #[test]
    fn writes_go_to_the_back_buffer_only() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel(1, 2, 100);
        fb.set_char(0, 0, 'Z');
        assert_eq!(fb.back_cell(1, 2), Some('@'));
        assert_eq!(fb.back_cell(0, 0), Some('Z'));
        assert_eq!(fb.front_cell(1, 2), Some(' '));
        assert_eq!(fb.front_cell(0, 0), Some(' '));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        let before = fb.clone();
        fb.set_pixel(2, 0, 100);
        fb.set_pixel(0, 2, 100);
        fb.set_char(u16::MAX, u16::MAX, '!');
        assert_eq!(fb, before);
        assert_eq!(fb.back_cell(2, 0), None);
    }

    #[test]
    fn clear_fills_back_with_ramp_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.clear(100);
        assert_eq!(fb.back_cell(0, 0), Some('@'));
        assert_eq!(fb.back_cell(1, 0), Some('@'));
        assert_eq!(fb.front_cell(0, 0), Some(' '));
    }

    #[test]
    fn swap_flips_roles() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.set_char(0, 0, 'A');
        fb.swap();
        assert_eq!(fb.front_cell(0, 0), Some('A'));
        assert_eq!(fb.back_cell(0, 0), Some(' '));
        fb.swap();
        assert_eq!(fb.back_cell(0, 0), Some('A'));
    }

    #[test]
    fn encode_frames_rows_with_border() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_char(0, 0, 'a');
        fb.set_char(1, 0, 'b');
        fb.swap();

        let mut out = Vec::new();
        encode_front_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["████", "█ab█", "████"]);
    }
}
