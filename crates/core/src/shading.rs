//! Lighting model.
//!
//! Brightness is a float in `0.0..=100.0`:
//!
//! ```text
//! brightness = ambient + diffuse_scale * cos(incidence) + sky_peak * max(0, n · -sky_dir)
//! ```
//!
//! clamped before it leaves this module. The frame buffer clamps again on write.

use crate::geometry::{Intersection, Shape};
use crate::math::Vector3;
use crate::types::MAX_BRIGHTNESS;

/// Directional light coming from the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyLight {
    /// Direction the light travels in. Unit length.
    pub direction: Vector3,
    /// Brightness added to a surface facing straight into the light, `0..=100`.
    pub peak: u8,
}

impl SkyLight {
    pub fn new(direction: Vector3, peak: u8) -> Self {
        Self {
            direction: direction.normalize(),
            peak: peak.min(MAX_BRIGHTNESS as u8),
        }
    }

    /// Contribution for a surface with unit normal `normal`.
    pub fn contribution(&self, normal: Vector3) -> f32 {
        let facing = normal.dot(-self.direction);
        if facing > 0.0 {
            self.peak as f32 * facing
        } else {
            0.0
        }
    }
}

impl Default for SkyLight {
    fn default() -> Self {
        Self::new(-Vector3::Y, 70)
    }
}

/// Constant terms of the lighting model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    /// Brightness of any lit surface before light terms are added.
    pub ambient: f32,
    /// Scale of the view-facing term `cos(incidence)`.
    pub diffuse_scale: f32,
}

impl ShadingParams {
    /// Plain hit/miss rendering: every hit is drawn at full brightness.
    pub const fn flat() -> Self {
        Self {
            ambient: MAX_BRIGHTNESS as f32,
            diffuse_scale: 0.0,
        }
    }
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            ambient: 10.0,
            diffuse_scale: 20.0,
        }
    }
}

/// Clamp a brightness value into `0..=MAX_BRIGHTNESS`. NaN maps to 0.
#[inline]
pub fn clamp_brightness(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_BRIGHTNESS as f32)
}

/// Brightness for a ray travelling along unit `direction` that produced `hit`
/// against `shape`.
///
/// A miss is background (0). A ray starting inside the shape sees it at full
/// brightness since no surface point is defined.
pub fn shade<S: Shape + ?Sized>(
    hit: Intersection,
    direction: Vector3,
    shape: &S,
    sky: &SkyLight,
    params: &ShadingParams,
) -> f32 {
    let entry = match hit {
        Intersection::Miss => return 0.0,
        Intersection::Inside => return MAX_BRIGHTNESS as f32,
        Intersection::Pierce { entry, .. } => entry,
    };

    let normal = shape.normal_at(entry);
    let incidence = (-direction).angle_between(normal).abs();
    // acos of a dot product that rounded just past 1.0
    let incidence = if incidence.is_nan() { 0.0 } else { incidence };

    let diffuse = params.diffuse_scale * incidence.cos();
    let sky_term = sky.contribution(normal);

    clamp_brightness(params.ambient + diffuse + sky_term)
}
