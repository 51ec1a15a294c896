//! Frame buffer quantization, bounds, and double-buffer semantics.

use tui_raycaster::term::{glyph_for, FrameBuffer};
use tui_raycaster::types::LUMINANCE_RAMP;

#[test]
fn glyph_ramp_endpoints_and_clamping() {
    assert_eq!(glyph_for(0), LUMINANCE_RAMP[0]);
    assert_eq!(glyph_for(100), LUMINANCE_RAMP[9]);
    assert_eq!(glyph_for(101), LUMINANCE_RAMP[9]);
    assert_eq!(glyph_for(5000), LUMINANCE_RAMP[9]);
    assert_eq!(glyph_for(-1), LUMINANCE_RAMP[0]);
}

#[test]
fn glyphs_are_monotonic_in_brightness() {
    let position = |c: char| LUMINANCE_RAMP.iter().position(|&r| r == c).unwrap();
    let mut last = 0;
    for b in 0..=100 {
        let idx = position(glyph_for(b));
        assert!(idx >= last, "ramp went backwards at {}", b);
        last = idx;
    }
}

#[test]
fn out_of_range_set_pixel_leaves_buffer_unchanged() {
    let mut fb = FrameBuffer::new(5, 3);
    fb.set_pixel(2, 1, 60);
    let before = fb.clone();

    fb.set_pixel(5, 0, 100);
    fb.set_pixel(0, 3, 100);
    fb.set_pixel(u16::MAX, 1, 100);
    fb.set_char(7, 7, '!');

    assert_eq!(fb, before);
}

#[test]
fn present_shows_back_buffer_and_clear_only_touches_new_back() {
    let mut fb = FrameBuffer::new(4, 2);
    fb.clear(0);
    fb.set_pixel(0, 0, 100);
    fb.set_pixel(3, 1, 50);

    let mut out = Vec::new();
    fb.present(&mut out).unwrap();
    assert_eq!(fb.front_cell(0, 0), Some('@'));
    assert_eq!(fb.front_cell(3, 1), Some('='));

    fb.clear(100);
    assert_eq!(fb.front_cell(0, 0), Some('@'));
    assert_eq!(fb.front_cell(1, 0), Some(' '));
    assert_eq!(fb.front_cell(3, 1), Some('='));
    assert_eq!(fb.back_cell(1, 0), Some('@'));
}

#[test]
fn stale_back_buffer_survives_without_clear() {
    let mut fb = FrameBuffer::new(2, 1);
    fb.set_char(0, 0, 'A');
    let mut out = Vec::new();
    fb.present(&mut out).unwrap();
    fb.set_char(1, 0, 'B');
    fb.present(&mut out).unwrap();
    fb.present(&mut out).unwrap();
    // Third present shows the first frame's grid again, never cleared.
    assert_eq!(fb.front_row(0), Some("A ".to_string()));
}

#[test]
fn presented_output_is_bordered_with_crlf_rows() {
    let mut fb = FrameBuffer::new(3, 2);
    fb.set_pixel(1, 0, 100);
    let mut out = Vec::new();
    fb.present(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let body = text.split_once("\x1b[1;1H").map(|(_, rest)| rest).unwrap();
    assert_eq!(body, "█████\r\n█ @ █\r\n█   █\r\n█████\r\n");
}
