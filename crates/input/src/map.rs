//! Key mapping from terminal events to camera actions.

use crate::types::CameraAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to camera actions.
///
/// Letter keys are case-insensitive. `q` is yaw, not quit.
pub fn handle_key_event(key: KeyEvent) -> Option<CameraAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(CameraAction::YawRight),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(CameraAction::YawLeft),
        KeyCode::Char('[') => Some(CameraAction::PitchDown),
        KeyCode::Char(']') => Some(CameraAction::PitchUp),
        KeyCode::Char(';') => Some(CameraAction::RollLeft),
        KeyCode::Char('\'') => Some(CameraAction::RollRight),

        // Camera-relative movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(CameraAction::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(CameraAction::MoveBackward)
        }

        // World-space movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(CameraAction::StrafeLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(CameraAction::StrafeRight)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::PageUp => Some(CameraAction::Ascend),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::PageDown => {
            Some(CameraAction::Descend)
        }

        _ => None,
    }
}

/// Check if key should quit the renderer.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
