//! Scene description.
//!
//! One sphere lit by one directional sky light. The scene is configuration
//! data handed to the renderer at construction; nothing here is hard-coded in
//! the render loop.

use crate::geometry::{Shape, Sphere};
use crate::math::Vector3;
use crate::shading::{shade, ShadingParams, SkyLight};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub sphere: Sphere,
    pub sky: SkyLight,
    pub shading: ShadingParams,
}

impl Scene {
    pub fn new(sphere: Sphere, sky: SkyLight, shading: ShadingParams) -> Self {
        Self {
            sphere,
            sky,
            shading,
        }
    }

    /// Brightness seen along one ray. `direction` must be unit length.
    pub fn trace(&self, origin: Vector3, direction: Vector3) -> f32 {
        let hit = self.sphere.intersect(origin, direction);
        shade(hit, direction, &self.sphere, &self.sky, &self.shading)
    }
}

impl Default for Scene {
    /// Sphere of radius 200 at (1000, 1000, 1000), straight down the default
    /// camera's line of sight, lit from above.
    fn default() -> Self {
        Self::new(
            Sphere::new(Vector3::new(1000.0, 1000.0, 1000.0), 200.0),
            SkyLight::default(),
            ShadingParams::default(),
        )
    }
}
