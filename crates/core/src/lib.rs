//! Core rendering module - pure, deterministic, and testable
//!
//! This crate holds all the geometry and lighting. It has **no dependencies**
//! on the terminal, input, or timing, so it is:
//!
//! - **Deterministic**: the same camera state always produces the same frame
//! - **Testable**: every geometric property is checked without a terminal
//! - **Parallel-safe**: per-frame ray state is an immutable `Copy` snapshot
//!
//! # Module Structure
//!
//! - [`math`]: `Vector3`, Euler and Rodrigues rotations, degree conversions
//! - [`geometry`]: analytic ray/sphere intersection behind the [`Shape`] trait
//! - [`shading`]: ambient + view-facing diffuse + directional sky light
//! - [`scene`]: the sphere and light, as configuration data
//! - [`camera`]: position/orientation state, movement, per-pixel ray directions
//! - [`renderer`]: per-frame orchestration into any [`PixelTarget`]
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{Camera, PixelTarget, Scene, SceneRenderer};
//!
//! struct Histogram {
//!     lit: usize,
//! }
//!
//! impl PixelTarget for Histogram {
//!     fn width(&self) -> u16 { 30 }
//!     fn height(&self) -> u16 { 20 }
//!     fn set_pixel(&mut self, _x: u16, _y: u16, brightness: i32) {
//!         if brightness > 0 {
//!             self.lit += 1;
//!         }
//!     }
//!     fn set_char(&mut self, _x: u16, _y: u16, _ch: char) {}
//! }
//!
//! let renderer = SceneRenderer::new(Scene::default());
//! let camera = Camera::new(30, 20);
//! let mut target = Histogram { lit: 0 };
//! renderer.render_scene(&camera, &mut target);
//! assert!(target.lit > 0);
//! ```

pub mod camera;
pub mod geometry;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod shading;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use camera::{Camera, FrameRays};
pub use geometry::{intersect_ray_sphere, Intersection, Shape, Sphere};
pub use math::{deg_to_rad, rad_to_deg, Vector3};
pub use renderer::{debug_line, PixelTarget, SceneRenderer};
pub use scene::Scene;
pub use shading::{clamp_brightness, shade, ShadingParams, SkyLight};
