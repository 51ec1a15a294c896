//! Core types module - shared constants and commands
//!
//! This crate defines the fundamental types used throughout the renderer.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the math core, the terminal layer, and the input layer alike.
//!
//! # Frame Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 30 | Frame width in character cells |
//! | `DEFAULT_HEIGHT` | 20 | Frame height in character cells |
//! | `DEFAULT_FPS` | 60 | Frame rate cap |
//!
//! # Lens
//!
//! The horizontal field of view is fixed at 90°. The vertical field of view is
//! derived from it as `horizontal * height / width * VERTICAL_FOV_SCALE`; the
//! scale compensates for terminal cells being taller than they are wide.
//!
//! # Controls
//!
//! Each key press moves the camera by a fixed step:
//!
//! - Yaw: `YAW_STEP` radians
//! - Pitch / roll: `PITCH_STEP` / `ROLL_STEP` radians
//! - Translation: `MOVE_STEP` world units
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{CameraAction, LUMINANCE_RAMP, MAX_BRIGHTNESS};
//!
//! let action = CameraAction::from_str("yawLeft").unwrap();
//! assert_eq!(action, CameraAction::YawLeft);
//! assert_eq!(action.as_str(), "yawLeft");
//!
//! assert_eq!(LUMINANCE_RAMP.len(), 10);
//! assert_eq!(MAX_BRIGHTNESS, 100);
//! ```

/// Default frame width in cells
pub const DEFAULT_WIDTH: u16 = 30;

/// Default frame height in cells
pub const DEFAULT_HEIGHT: u16 = 20;

/// Default frame rate cap
pub const DEFAULT_FPS: u32 = 60;

/// Horizontal field of view in degrees
pub const HORIZONTAL_FOV_DEG: f32 = 90.0;

/// Multiplier applied on top of the raw `height / width` ratio when deriving the
/// vertical field of view.
pub const VERTICAL_FOV_SCALE: f32 = 1.5;

/// Brightest value a pixel can take. Brightness is always in `0..=MAX_BRIGHTNESS`.
pub const MAX_BRIGHTNESS: i32 = 100;

/// Luminance ramp, emptiest glyph first.
pub const LUMINANCE_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Glyph used for the frame border
pub const BORDER_CHAR: char = '█';

/// Yaw change per key press (radians)
pub const YAW_STEP: f32 = 0.05;

/// Pitch change per key press (radians)
pub const PITCH_STEP: f32 = 0.1;

/// Roll change per key press (radians)
pub const ROLL_STEP: f32 = 0.1;

/// Translation per key press (world units)
pub const MOVE_STEP: f32 = 10.0;

/// Upper bound on camera actions applied between two frames.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

/// Discrete camera-control commands produced by the input layer.
///
/// Rotations add to the camera's Euler angles. `MoveForward`/`MoveBackward`
/// travel along the camera's facing (yaw only); strafing and vertical moves
/// are in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Turn towards the left edge of the screen
    YawLeft,
    /// Turn towards the right edge of the screen (positive yaw)
    YawRight,
    /// Tilt the view up (negative pitch)
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    /// Step along the camera's facing
    MoveForward,
    /// Step against the camera's facing
    MoveBackward,
    /// World-space step towards +Z
    StrafeLeft,
    /// World-space step towards -Z
    StrafeRight,
    /// World-space step towards +Y
    Ascend,
    /// World-space step towards -Y
    Descend,
}

impl CameraAction {
    /// All actions, in declaration order.
    pub const ALL: [CameraAction; 12] = [
        CameraAction::YawLeft,
        CameraAction::YawRight,
        CameraAction::PitchUp,
        CameraAction::PitchDown,
        CameraAction::RollLeft,
        CameraAction::RollRight,
        CameraAction::MoveForward,
        CameraAction::MoveBackward,
        CameraAction::StrafeLeft,
        CameraAction::StrafeRight,
        CameraAction::Ascend,
        CameraAction::Descend,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycaster_types::CameraAction;
    ///
    /// assert_eq!(CameraAction::from_str("moveForward"), Some(CameraAction::MoveForward));
    /// assert_eq!(CameraAction::from_str("PITCHUP"), Some(CameraAction::PitchUp));
    /// assert_eq!(CameraAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yawleft" => Some(CameraAction::YawLeft),
            "yawright" => Some(CameraAction::YawRight),
            "pitchup" => Some(CameraAction::PitchUp),
            "pitchdown" => Some(CameraAction::PitchDown),
            "rollleft" => Some(CameraAction::RollLeft),
            "rollright" => Some(CameraAction::RollRight),
            "moveforward" => Some(CameraAction::MoveForward),
            "movebackward" => Some(CameraAction::MoveBackward),
            "strafeleft" => Some(CameraAction::StrafeLeft),
            "straferight" => Some(CameraAction::StrafeRight),
            "ascend" => Some(CameraAction::Ascend),
            "descend" => Some(CameraAction::Descend),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAction::YawLeft => "yawLeft",
            CameraAction::YawRight => "yawRight",
            CameraAction::PitchUp => "pitchUp",
            CameraAction::PitchDown => "pitchDown",
            CameraAction::RollLeft => "rollLeft",
            CameraAction::RollRight => "rollRight",
            CameraAction::MoveForward => "moveForward",
            CameraAction::MoveBackward => "moveBackward",
            CameraAction::StrafeLeft => "strafeLeft",
            CameraAction::StrafeRight => "strafeRight",
            CameraAction::Ascend => "ascend",
            CameraAction::Descend => "descend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_program_defaults() {
        assert_eq!(DEFAULT_WIDTH, 30);
        assert_eq!(DEFAULT_HEIGHT, 20);
        assert_eq!(DEFAULT_FPS, 60);
        assert_eq!(HORIZONTAL_FOV_DEG, 90.0);
        assert_eq!(VERTICAL_FOV_SCALE, 1.5);
        assert_eq!(YAW_STEP, 0.05);
        assert_eq!(PITCH_STEP, 0.1);
        assert_eq!(ROLL_STEP, 0.1);
        assert_eq!(MOVE_STEP, 10.0);
    }

    #[test]
    fn ramp_runs_from_empty_to_full() {
        assert_eq!(LUMINANCE_RAMP[0], ' ');
        assert_eq!(LUMINANCE_RAMP[LUMINANCE_RAMP.len() - 1], '@');
    }

    #[test]
    fn action_string_roundtrip_covers_every_variant() {
        for action in CameraAction::ALL {
            assert_eq!(CameraAction::from_str(action.as_str()), Some(action));
        }
    }
}
