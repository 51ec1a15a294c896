//! One frame of the renderer: clear, render, present.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::core::{Camera, Scene, SceneRenderer};
use crate::term::{encode_front_into, FrameBuffer, TerminalRenderer};
use crate::types::CameraAction;

/// Owns the camera, the scene renderer, and the frame buffer for a run.
///
/// Camera actions are applied between frames only; `render_frame` borrows the
/// camera immutably for the whole pass.
pub struct Engine {
    camera: Camera,
    renderer: SceneRenderer,
    fb: FrameBuffer,
    frames: u64,
}

impl Engine {
    pub fn new(width: u16, height: u16, renderer: SceneRenderer) -> Self {
        Self {
            camera: Camera::new(width, height),
            renderer,
            fb: FrameBuffer::new(width, height),
            frames: 0,
        }
    }

    /// Default scene, sequential pixel loop.
    pub fn with_default_scene(width: u16, height: u16) -> Self {
        Self::new(width, height, SceneRenderer::new(Scene::default()))
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn apply(&mut self, action: CameraAction) {
        self.camera.apply_action(action);
        debug!(
            action = action.as_str(),
            position = %self.camera.position(),
            rotation = %self.camera.rotation(),
            "camera action applied"
        );
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = CameraAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Clear the back buffer and draw the current view into it.
    pub fn render_frame(&mut self) {
        self.fb.clear(0);
        self.renderer.render_scene(&self.camera, &mut self.fb);
    }

    /// Render and present to the terminal.
    pub fn step(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        self.render_frame();
        term.present(&mut self.fb)?;
        self.frames += 1;
        Ok(())
    }

    /// Render and present to any writer.
    pub fn step_into<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.render_frame();
        self.fb.present(out)?;
        self.frames += 1;
        Ok(())
    }

    /// Render and write only the bordered frame, with no terminal control
    /// sequences. Used for headless dumps.
    pub fn step_plain<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.render_frame();
        self.fb.swap();
        encode_front_into(&self.fb, out)?;
        self.frames += 1;
        Ok(())
    }
}
