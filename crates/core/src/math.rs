//! Vector math module - 3D vectors and rotations
//!
//! `Vector3` is a plain `Copy` value; every operation returns a new vector.
//! Angles are radians everywhere and are never wrapped into `[0, 2π)`.
//!
//! Two rotation primitives are provided:
//!
//! - [`Vector3::rotate_euler`]: X, then Y, then Z (fixed order)
//! - [`Vector3::rotate_about`]: Rodrigues' rotation about an arbitrary axis

use std::f32::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// 3D vector of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length.
    ///
    /// The vector must be nonzero. A zero vector divides by zero and yields
    /// NaN components; this is not guarded.
    #[inline]
    pub fn normalize(self) -> Vector3 {
        debug_assert!(self != Vector3::ZERO, "normalize called on a zero vector");
        let length = self.length();
        Vector3::new(self.x / length, self.y / length, self.z / length)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vector3) -> f32 {
        (self - other).length()
    }

    #[inline]
    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Rotate by Euler angles `(x, y, z)`: about X first, then Y, then Z.
    ///
    /// The order is fixed. Swapping it changes the result for anything but
    /// single-axis rotations.
    pub fn rotate_euler(self, angles: Vector3) -> Vector3 {
        // X
        let (sin_x, cos_x) = angles.x.sin_cos();
        let y1 = cos_x * self.y - sin_x * self.z;
        let z1 = sin_x * self.y + cos_x * self.z;

        // Y
        let (sin_y, cos_y) = angles.y.sin_cos();
        let x2 = cos_y * self.x + sin_y * z1;
        let z2 = -sin_y * self.x + cos_y * z1;

        // Z
        let (sin_z, cos_z) = angles.z.sin_cos();
        let x3 = cos_z * x2 - sin_z * y1;
        let y3 = sin_z * x2 + cos_z * y1;

        Vector3::new(x3, y3, z2)
    }

    /// Rotate about `axis` by `angle` radians (Rodrigues' formula).
    ///
    /// `v' = v·cosθ + (k × v)·sinθ + k·(k · v)·(1 − cosθ)` with `k` the
    /// normalized axis. The axis must be nonzero but need not be unit length.
    pub fn rotate_about(self, axis: Vector3, angle: f32) -> Vector3 {
        let k = axis.normalize();
        let (sin, cos) = angle.sin_cos();
        self * cos + k.cross(self) * sin + k * (k.dot(self) * (1.0 - cos))
    }

    /// Angle between two unit vectors, `acos(a · b)`.
    ///
    /// Both inputs must already be normalized; otherwise the result is not a
    /// meaningful angle (and may be NaN).
    #[inline]
    pub fn angle_between(self, other: Vector3) -> f32 {
        self.dot(other).acos()
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(self, other: Vector3, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}
