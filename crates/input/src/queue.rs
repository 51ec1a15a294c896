//! Bounded per-frame action queue.
//!
//! Keys that arrive while a frame is being waited out are queued here and
//! drained in one go before the next render, so the camera never changes
//! during a render pass.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::{CameraAction, MAX_ACTIONS_PER_FRAME};

/// What a single key event did to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Queued(CameraAction),
    /// Mapped, but the queue was already full for this frame.
    Dropped(CameraAction),
    Quit,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: ArrayVec<CameraAction, MAX_ACTIONS_PER_FRAME>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue an action. Returns `false` if the queue is full.
    pub fn push(&mut self, action: CameraAction) -> bool {
        self.pending.try_push(action).is_ok()
    }

    /// Map and queue a key event.
    ///
    /// Press and auto-repeat both count; releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }
        if should_quit(key) {
            return KeyOutcome::Quit;
        }
        match handle_key_event(key) {
            Some(action) if self.push(action) => KeyOutcome::Queued(action),
            Some(action) => KeyOutcome::Dropped(action),
            None => KeyOutcome::Ignored,
        }
    }

    /// Take every queued action, oldest first.
    pub fn drain(&mut self) -> ArrayVec<CameraAction, MAX_ACTIONS_PER_FRAME> {
        std::mem::take(&mut self.pending)
    }
}
