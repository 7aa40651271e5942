use glam::Quat;
use gravfield_common::InputState;

use crate::binding::{Key, MouseButton};
use crate::look::{LookConfig, LookControls};

/// Pointer-lock transitions reported to the host so it can show or hide its overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    Locked,
    Unlocked,
}

/// First-person controls: key/button state plus mouse look behind a pointer lock.
///
/// The host forwards raw key, button and motion events; the simulation reads
/// `state()` and `quaternion()` once per frame.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    state: InputState,
    look: LookControls,
    locked: bool,
}

impl Controls {
    pub fn new(config: LookConfig) -> Self {
        Self {
            state: InputState::default(),
            look: LookControls::new(config),
            locked: false,
        }
    }

    /// Snapshot of the current key and button state.
    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn look(&self) -> &LookControls {
        &self.look
    }

    /// Current look rotation (yaw then pitch).
    pub fn quaternion(&self) -> Quat {
        self.look.quaternion()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Capture the pointer. Returns the event only when the state changed.
    pub fn lock(&mut self) -> Option<LockEvent> {
        if self.locked {
            return None;
        }
        self.locked = true;
        tracing::debug!("pointer locked");
        Some(LockEvent::Locked)
    }

    /// Release the pointer. Held keys stay held until their key-up arrives.
    pub fn unlock(&mut self) -> Option<LockEvent> {
        if !self.locked {
            return None;
        }
        self.locked = false;
        tracing::debug!("pointer unlocked");
        Some(LockEvent::Unlocked)
    }

    pub fn key_down(&mut self, key: Key) {
        if let Some(flag) = key.flag(&mut self.state) {
            *flag = true;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if let Some(flag) = key.flag(&mut self.state) {
            *flag = false;
        }
    }

    /// Record a click. Clicks latch until `clear_clicks`.
    pub fn mouse_down(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.state.click_left = true,
            MouseButton::Right => self.state.click_right = true,
            MouseButton::Middle | MouseButton::Other(_) => {}
        }
    }

    /// Consume latched clicks, typically once per frame after reading `state()`.
    pub fn clear_clicks(&mut self) {
        self.state.click_left = false;
        self.state.click_right = false;
    }

    /// Relative pointer motion in pixels. Ignored while unlocked.
    pub fn mouse_move(&mut self, dx: f32, dy: f32) {
        if !self.locked {
            return;
        }
        self.look.mouse_move(dx, dy);
    }
}
