//! Camera: position, orientation, and per-pixel ray generation.
//!
//! Orientation is a set of Euler angles `(pitch, yaw, roll)` in radians applied
//! to a fixed base frame: the camera looks along `(1, 1, 1)` with up as close
//! to world +Y as possible. Angles accumulate without wrapping.
//!
//! Ray generation is split in two so the per-frame work happens once:
//! [`Camera::frame_rays`] snapshots the rotated basis, then
//! [`FrameRays::direction`] is a cheap per-pixel call that can run on any thread.

use crate::math::{deg_to_rad, Vector3};
use crate::types::{
    CameraAction, HORIZONTAL_FOV_DEG, MOVE_STEP, PITCH_STEP, ROLL_STEP, VERTICAL_FOV_SCALE,
    YAW_STEP,
};

/// Unit forward vector of an unrotated camera, `normalize(1, 1, 1)`.
pub fn base_forward() -> Vector3 {
    Vector3::new(1.0, 1.0, 1.0).normalize()
}

/// Unit up vector of an unrotated camera: world +Y with its forward component
/// removed.
pub fn base_up() -> Vector3 {
    Vector3::new(-1.0, 2.0, -1.0).normalize()
}

/// Derive the vertical field of view for a `width x height` cell grid.
pub fn vertical_fov_for(horizontal_fov: f32, width: u16, height: u16) -> f32 {
    horizontal_fov * height as f32 / width as f32 * VERTICAL_FOV_SCALE
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vector3,
    rotation: Vector3,
    horizontal_fov: f32,
    vertical_fov: f32,
    width: u16,
    height: u16,
}

impl Camera {
    /// Camera at the origin with no rotation, sized for a `width x height` frame.
    pub fn new(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0, "camera viewport must be non-empty");
        let horizontal_fov = deg_to_rad(HORIZONTAL_FOV_DEG);
        Self {
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            horizontal_fov,
            vertical_fov: vertical_fov_for(horizontal_fov, width, height),
            width,
            height,
        }
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Euler angles `(pitch, yaw, roll)` in radians, unwrapped.
    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }

    pub fn horizontal_fov(&self) -> f32 {
        self.horizontal_fov
    }

    pub fn vertical_fov(&self) -> f32 {
        self.vertical_fov
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Adopt a new frame size. The vertical field of view is re-derived from
    /// the new aspect ratio.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.vertical_fov = vertical_fov_for(self.horizontal_fov, width, height);
    }

    /// Snapshot of everything needed to generate this frame's rays.
    pub fn frame_rays(&self) -> FrameRays {
        let forward = base_forward().rotate_euler(self.rotation);
        let up = base_up().rotate_euler(self.rotation);
        FrameRays {
            origin: self.position,
            forward,
            up,
            right: up.cross(forward),
            step_h: self.horizontal_fov / self.width as f32,
            step_v: self.vertical_fov / self.height as f32,
            fov_h: self.horizontal_fov,
            fov_v: self.vertical_fov,
        }
    }

    /// World-space unit direction through the center of cell `(x, y)`.
    ///
    /// Prefer [`Camera::frame_rays`] when generating a whole frame.
    pub fn ray_direction_for(&self, x: u16, y: u16) -> Vector3 {
        self.frame_rays().direction(x, y)
    }

    /// Translate by `delta` expressed relative to the camera's yaw.
    ///
    /// Only yaw is applied, so pitching the view does not make forward motion
    /// climb or dive.
    pub fn move_forward(&mut self, delta: Vector3) {
        let yaw_only = Vector3::new(0.0, self.rotation.y, 0.0);
        self.position = self.position + delta.rotate_euler(yaw_only);
    }

    /// Translate by `delta` in world space, ignoring orientation.
    pub fn move_absolute(&mut self, delta: Vector3) {
        self.position = self.position + delta;
    }

    /// Add `delta` to the Euler angles. No clamping, no wraparound.
    pub fn rotate(&mut self, delta: Vector3) {
        self.rotation = self.rotation + delta;
    }

    /// Apply one discrete control command with the fixed step sizes.
    pub fn apply_action(&mut self, action: CameraAction) {
        match action {
            CameraAction::YawLeft => self.rotate(Vector3::new(0.0, -YAW_STEP, 0.0)),
            CameraAction::YawRight => self.rotate(Vector3::new(0.0, YAW_STEP, 0.0)),
            CameraAction::PitchUp => self.rotate(Vector3::new(-PITCH_STEP, 0.0, 0.0)),
            CameraAction::PitchDown => self.rotate(Vector3::new(PITCH_STEP, 0.0, 0.0)),
            CameraAction::RollLeft => self.rotate(Vector3::new(0.0, 0.0, ROLL_STEP)),
            CameraAction::RollRight => self.rotate(Vector3::new(0.0, 0.0, -ROLL_STEP)),
            CameraAction::MoveForward => self.move_forward(base_forward() * MOVE_STEP),
            CameraAction::MoveBackward => self.move_forward(base_forward() * -MOVE_STEP),
            CameraAction::StrafeLeft => self.move_absolute(Vector3::Z * MOVE_STEP),
            CameraAction::StrafeRight => self.move_absolute(Vector3::Z * -MOVE_STEP),
            CameraAction::Ascend => self.move_absolute(Vector3::Y * MOVE_STEP),
            CameraAction::Descend => self.move_absolute(Vector3::Y * -MOVE_STEP),
        }
    }
}

/// Immutable per-frame ray basis.
///
/// Cell `(x, y)` samples the angular center of its cell:
/// `offset = index * step + step / 2 - fov / 2`, so rays are spread
/// symmetrically about `forward`. Offsets rotate about the camera's own
/// `right` and `up` axes, so the frustum follows every camera rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRays {
    pub origin: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
    pub right: Vector3,
    step_h: f32,
    step_v: f32,
    fov_h: f32,
    fov_v: f32,
}

impl FrameRays {
    /// Horizontal angular offset of column `x` from the forward axis.
    /// Positive is to the right.
    pub fn horizontal_offset(&self, x: u16) -> f32 {
        x as f32 * self.step_h + self.step_h / 2.0 - self.fov_h / 2.0
    }

    /// Vertical angular offset of row `y` from the forward axis.
    /// Positive is downwards (rows grow towards the bottom of the screen).
    pub fn vertical_offset(&self, y: u16) -> f32 {
        y as f32 * self.step_v + self.step_v / 2.0 - self.fov_v / 2.0
    }

    /// Unit ray direction for cell `(x, y)`.
    pub fn direction(&self, x: u16, y: u16) -> Vector3 {
        let pitched = self
            .forward
            .rotate_about(self.right, self.vertical_offset(y));
        pitched.rotate_about(self.up, self.horizontal_offset(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rad_to_deg;

    const EPS: f32 = 1e-4;

    #[test]
    fn base_frame_is_orthonormal() {
        let f = base_forward();
        let u = base_up();
        assert!((f.length() - 1.0).abs() < EPS);
        assert!((u.length() - 1.0).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(u.y > 0.0);
    }

    #[test]
    fn vertical_fov_uses_aspect_and_scale() {
        let cam = Camera::new(30, 20);
        let expected = deg_to_rad(90.0) * 20.0 / 30.0 * 1.5;
        assert!((cam.vertical_fov() - expected).abs() < EPS);
        assert!((rad_to_deg(cam.vertical_fov()) - 90.0).abs() < 1e-3);
    }

    #[test]
    fn resize_rederives_vertical_fov() {
        let mut cam = Camera::new(30, 20);
        cam.resize(60, 20);
        let expected = deg_to_rad(90.0) * 20.0 / 60.0 * 1.5;
        assert!((cam.vertical_fov() - expected).abs() < EPS);
        assert_eq!(cam.viewport(), (60, 20));
    }

    #[test]
    fn offsets_are_symmetric_about_forward() {
        let rays = Camera::new(30, 20).frame_rays();
        assert!((rays.horizontal_offset(0) + rays.horizontal_offset(29)).abs() < EPS);
        assert!((rays.vertical_offset(0) + rays.vertical_offset(19)).abs() < EPS);
        assert!(rays.horizontal_offset(0) < 0.0);
    }

    #[test]
    fn odd_width_center_column_looks_straight_ahead() {
        let cam = Camera::new(31, 21);
        let d = cam.ray_direction_for(15, 10);
        assert!(d.approx_eq(base_forward(), EPS));
    }

    #[test]
    fn ray_directions_are_unit_length() {
        let rays = Camera::new(30, 20)
            .with_rotation(Vector3::new(0.3, -1.2, 0.7))
            .frame_rays();
        for (x, y) in [(0, 0), (29, 0), (0, 19), (29, 19), (12, 7)] {
            assert!((rays.direction(x, y).length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn columns_to_the_right_turn_towards_camera_right() {
        let rays = Camera::new(30, 20).frame_rays();
        assert!(rays.direction(29, 10).dot(rays.right) > 0.0);
        assert!(rays.direction(0, 10).dot(rays.right) < 0.0);
        assert!(rays.direction(15, 0).dot(rays.up) > 0.0);
        assert!(rays.direction(15, 19).dot(rays.up) < 0.0);
    }

    #[test]
    fn right_hand_columns_match_positive_world_yaw() {
        // Positive yaw about world Y swings (1, 1, 1) towards +X and -Z; the
        // rightmost column must lean the same way.
        let rays = Camera::new(31, 21).frame_rays();
        let h = rays.horizontal_offset(30);
        let yawed = rays.forward.rotate_euler(Vector3::new(0.0, h, 0.0));
        let d = rays.direction(30, 10);
        assert!(d.dot(yawed) > 0.95, "direction {} vs yawed {}", d, yawed);
        assert!(d.x > rays.forward.x);
        assert!(d.z < rays.forward.z);

        let left = rays.direction(0, 10);
        assert!(left.x < rays.forward.x);
        assert!(left.z > rays.forward.z);
    }

    #[test]
    fn screen_right_is_world_plus_x_minus_z() {
        let rays = Camera::new(30, 20).frame_rays();
        let expected = Vector3::new(1.0, 0.0, -1.0).normalize();
        assert!(rays.right.approx_eq(expected, EPS));
    }

    #[test]
    fn yaw_right_turns_towards_the_right_edge() {
        let before = Camera::new(31, 21).frame_rays();
        let mut cam = Camera::new(31, 21);
        cam.apply_action(CameraAction::YawRight);
        let after = cam.frame_rays();
        assert!(after.forward.dot(before.right) > 0.0);
    }

    #[test]
    fn pitch_up_raises_the_view() {
        let before = Camera::new(31, 21).frame_rays();
        let mut cam = Camera::new(31, 21);
        cam.apply_action(CameraAction::PitchUp);
        assert!(cam.frame_rays().forward.y > before.forward.y);
        assert!(cam.frame_rays().forward.dot(before.up) > 0.0);
    }

    #[test]
    fn rays_follow_camera_yaw() {
        let yaw = 0.4;
        let cam = Camera::new(31, 21).with_rotation(Vector3::new(0.0, yaw, 0.0));
        let expected = base_forward().rotate_euler(Vector3::new(0.0, yaw, 0.0));
        assert!(cam.ray_direction_for(15, 10).approx_eq(expected, EPS));
    }

    #[test]
    fn move_forward_uses_yaw_only() {
        let mut cam = Camera::new(30, 20).with_rotation(Vector3::new(0.7, 0.0, 0.3));
        cam.move_forward(Vector3::new(10.0, 0.0, 0.0));
        assert!(cam.position().approx_eq(Vector3::new(10.0, 0.0, 0.0), EPS));

        let mut cam = Camera::new(30, 20).with_rotation(Vector3::new(0.0, deg_to_rad(90.0), 0.0));
        cam.move_forward(Vector3::new(10.0, 0.0, 0.0));
        assert!(cam.position().approx_eq(Vector3::new(0.0, 0.0, -10.0), EPS));
    }

    #[test]
    fn move_absolute_ignores_rotation() {
        let mut cam = Camera::new(30, 20).with_rotation(Vector3::new(1.0, 2.0, 3.0));
        cam.move_absolute(Vector3::new(0.0, 5.0, 0.0));
        assert_eq!(cam.position(), Vector3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn rotate_accumulates_without_wrapping() {
        let mut cam = Camera::new(30, 20);
        for _ in 0..100 {
            cam.rotate(Vector3::new(0.0, 0.1, 0.0));
        }
        assert!((cam.rotation().y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn actions_use_fixed_steps() {
        let mut cam = Camera::new(30, 20);
        cam.apply_action(CameraAction::YawRight);
        cam.apply_action(CameraAction::PitchUp);
        cam.apply_action(CameraAction::RollLeft);
        assert!(cam
            .rotation()
            .approx_eq(Vector3::new(-PITCH_STEP, YAW_STEP, ROLL_STEP), EPS));

        let mut cam = Camera::new(30, 20);
        cam.apply_action(CameraAction::MoveForward);
        assert!((cam.position().length() - MOVE_STEP).abs() < EPS);
        cam.apply_action(CameraAction::MoveBackward);
        assert!(cam.position().approx_eq(Vector3::ZERO, EPS));

        cam.apply_action(CameraAction::StrafeLeft);
        cam.apply_action(CameraAction::Ascend);
        assert!(cam
            .position()
            .approx_eq(Vector3::new(0.0, MOVE_STEP, MOVE_STEP), EPS));
    }
}
