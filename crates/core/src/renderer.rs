//! Scene renderer: one ray per cell, shaded, written into a pixel target.
//!
//! Every frame is computed from scratch from the camera's current state. The
//! camera is borrowed immutably for the whole pass, so it cannot move mid-frame.

use rayon::prelude::*;

use crate::camera::{Camera, FrameRays};
use crate::math::rad_to_deg;
use crate::scene::Scene;

/// Anything the renderer can draw into.
///
/// Out-of-range coordinates must be ignored.
pub trait PixelTarget {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    /// Write a brightness value. Implementations clamp to `0..=100`.
    fn set_pixel(&mut self, x: u16, y: u16, brightness: i32);
    /// Write a literal character, bypassing brightness quantization.
    fn set_char(&mut self, x: u16, y: u16, ch: char);
}

#[derive(Debug, Clone)]
pub struct SceneRenderer {
    scene: Scene,
    parallel: bool,
    debug_overlay: bool,
}

impl SceneRenderer {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            parallel: false,
            debug_overlay: true,
        }
    }

    /// Compute pixel brightness on the rayon pool. Writes into the target
    /// still happen on the calling thread, after every pixel is done.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Toggle the debug text row drawn over the bottom line.
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Render one frame of `camera`'s view into `target`.
    ///
    /// The camera's viewport must match the target's size; ray step angles
    /// come from the camera.
    pub fn render_scene<T: PixelTarget + ?Sized>(&self, camera: &Camera, target: &mut T) {
        let width = target.width();
        let height = target.height();
        debug_assert_eq!(
            camera.viewport(),
            (width, height),
            "camera viewport does not match the render target"
        );
        let rays = camera.frame_rays();

        if self.parallel {
            let brightness: Vec<i32> = (0..height)
                .into_par_iter()
                .flat_map_iter(|y| (0..width).map(move |x| self.pixel_brightness(&rays, x, y)))
                .collect();
            for (i, b) in brightness.into_iter().enumerate() {
                let x = (i % width as usize) as u16;
                let y = (i / width as usize) as u16;
                target.set_pixel(x, y, b);
            }
        } else {
            for y in 0..height {
                for x in 0..width {
                    target.set_pixel(x, y, self.pixel_brightness(&rays, x, y));
                }
            }
        }

        if self.debug_overlay {
            self.draw_debug_info(camera, target);
        }
    }

    /// Brightness of cell `(x, y)`, already clamped and truncated to an integer.
    pub fn pixel_brightness(&self, rays: &FrameRays, x: u16, y: u16) -> i32 {
        let direction = rays.direction(x, y);
        self.scene.trace(rays.origin, direction) as i32
    }

    /// Overwrite the last row with camera position, rotation (degrees), and
    /// distance to the sphere center, left-aligned and space-padded.
    pub fn draw_debug_info<T: PixelTarget + ?Sized>(&self, camera: &Camera, target: &mut T) {
        let height = target.height();
        if height == 0 {
            return;
        }
        let y = height - 1;
        let info = debug_line(camera, &self.scene);
        let mut chars = info.chars();
        for x in 0..target.width() {
            target.set_char(x, y, chars.next().unwrap_or(' '));
        }
    }
}

/// Text of the debug row. Values are truncated towards zero.
pub fn debug_line(camera: &Camera, scene: &Scene) -> String {
    let pos = camera.position();
    let rot = camera.rotation();
    format!(
        "pos: {} {} {}, rot: {} {} {}, dist: {}",
        pos.x as i32,
        pos.y as i32,
        pos.z as i32,
        rad_to_deg(rot.x) as i32,
        rad_to_deg(rot.y) as i32,
        rad_to_deg(rot.z) as i32,
        pos.distance(scene.sphere.center) as i32,
    )
}
