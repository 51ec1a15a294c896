//! Ray/shape intersection.
//!
//! Rays are `origin + t * direction` with `direction` a unit vector. Shapes
//! implement [`Shape`]; the renderer only talks to the trait, so adding a
//! primitive means adding an impl and taking the nearest hit.

use crate::math::Vector3;

/// Result of casting one ray against one shape.
///
/// Produced per ray and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The ray does not touch the shape.
    Miss,
    /// The ray origin is inside the shape. Entry/exit points are undefined.
    Inside,
    /// The ray pierces the shape, entering at `entry` and leaving at `exit`.
    /// A tangent ray has `entry == exit`.
    Pierce { entry: Vector3, exit: Vector3 },
}

impl Intersection {
    pub fn is_hit(&self) -> bool {
        !matches!(self, Intersection::Miss)
    }

    /// Entry point, when one is defined.
    pub fn entry(&self) -> Option<Vector3> {
        match self {
            Intersection::Pierce { entry, .. } => Some(*entry),
            _ => None,
        }
    }

    /// Exit point, when one is defined.
    pub fn exit(&self) -> Option<Vector3> {
        match self {
            Intersection::Pierce { exit, .. } => Some(*exit),
            _ => None,
        }
    }
}

/// A primitive that rays can be cast against.
pub trait Shape {
    /// Cast a ray. `direction` must be unit length.
    fn intersect(&self, origin: Vector3, direction: Vector3) -> Intersection;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vector3) -> Vector3;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vector3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn intersect(&self, origin: Vector3, direction: Vector3) -> Intersection {
        intersect_ray_sphere(origin, direction, self.center, self.radius)
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalize()
    }
}

/// Analytic ray/sphere test.
///
/// `direction` must be unit length. A ray grazing the sphere exactly
/// (closest approach equal to the radius) counts as a hit.
pub fn intersect_ray_sphere(
    origin: Vector3,
    direction: Vector3,
    center: Vector3,
    radius: f32,
) -> Intersection {
    if origin.distance(center) < radius {
        return Intersection::Inside;
    }

    let closest_approach = direction.dot(center - origin);
    if closest_approach < 0.0 {
        return Intersection::Miss;
    }

    let closest_point = origin + direction * closest_approach;
    let perpendicular = closest_point.distance(center);
    if perpendicular > radius {
        return Intersection::Miss;
    }

    // Rounding can push the radicand a hair below zero on a tangent ray.
    let half_chord = (radius * radius - perpendicular * perpendicular).max(0.0).sqrt();
    Intersection::Pierce {
        entry: closest_point - direction * half_chord,
        exit: closest_point + direction * half_chord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn head_on_ray_enters_and_exits_on_the_axis() {
        let hit = intersect_ray_sphere(
            Vector3::ZERO,
            Vector3::Z,
            Vector3::new(0.0, 0.0, 10.0),
            2.0,
        );
        assert_eq!(hit.entry().map(|p| p.approx_eq(Vector3::new(0.0, 0.0, 8.0), EPS)), Some(true));
        assert_eq!(hit.exit().map(|p| p.approx_eq(Vector3::new(0.0, 0.0, 12.0), EPS)), Some(true));
    }

    #[test]
    fn sphere_behind_the_ray_is_missed() {
        let hit = intersect_ray_sphere(
            Vector3::ZERO,
            -Vector3::Z,
            Vector3::new(0.0, 0.0, 10.0),
            2.0,
        );
        assert_eq!(hit, Intersection::Miss);
        assert!(!hit.is_hit());
    }

    #[test]
    fn offset_ray_passes_beside_the_sphere() {
        let hit = intersect_ray_sphere(
            Vector3::new(3.0, 0.0, 0.0),
            Vector3::Z,
            Vector3::new(0.0, 0.0, 10.0),
            2.0,
        );
        assert_eq!(hit, Intersection::Miss);
    }

    #[test]
    fn origin_inside_is_a_hit_without_points() {
        let hit = intersect_ray_sphere(Vector3::ZERO, Vector3::X, Vector3::ZERO, 5.0);
        assert_eq!(hit, Intersection::Inside);
        assert!(hit.is_hit());
        assert_eq!(hit.entry(), None);
    }

    #[test]
    fn tangent_ray_counts_as_hit() {
        let hit = intersect_ray_sphere(
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::Z,
            Vector3::new(0.0, 0.0, 10.0),
            2.0,
        );
        match hit {
            Intersection::Pierce { entry, exit } => assert!(entry.approx_eq(exit, EPS)),
            other => panic!("expected tangent hit, got {:?}", other),
        }
    }

    #[test]
    fn entry_and_exit_lie_on_the_surface() {
        let sphere = Sphere::new(Vector3::new(4.0, -3.0, 20.0), 5.0);
        let direction = Vector3::new(0.1, -0.1, 1.0).normalize();
        match sphere.intersect(Vector3::ZERO, direction) {
            Intersection::Pierce { entry, exit } => {
                assert!((entry.distance(sphere.center) - sphere.radius).abs() < EPS);
                assert!((exit.distance(sphere.center) - sphere.radius).abs() < EPS);
                assert!(entry.length() < exit.length());
            }
            other => panic!("expected pierce, got {:?}", other),
        }
    }

    #[test]
    fn sphere_normal_points_outward() {
        let sphere = Sphere::new(Vector3::new(1.0, 1.0, 1.0), 2.0);
        let n = sphere.normal_at(Vector3::new(1.0, 3.0, 1.0));
        assert!(n.approx_eq(Vector3::Y, EPS));
    }
}
