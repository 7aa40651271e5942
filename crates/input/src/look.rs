use std::f32::consts::{FRAC_PI_2, PI};

use glam::Quat;
use serde::{Deserialize, Serialize};

/// Radians of turn per pixel of mouse motion at `pointer_speed == 1`.
const RADIANS_PER_PIXEL: f32 = 0.002;

/// Errors from validating look settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("polar range [{min}, {max}] must satisfy 0 <= min < max <= pi")]
    InvalidPolarRange { min: f32, max: f32 },
    #[error("pointer speed {0} must be finite and positive")]
    InvalidPointerSpeed(f32),
}

/// Mouse-look tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    pub pointer_speed: f32,
    /// Smallest angle between view direction and straight up, in radians.
    pub min_polar_angle: f32,
    /// Largest angle between view direction and straight up, in radians.
    pub max_polar_angle: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            pointer_speed: 1.0,
            min_polar_angle: 0.01,
            max_polar_angle: PI - 0.01,
        }
    }
}

impl LookConfig {
    pub fn validate(&self) -> Result<(), InputError> {
        if !(self.pointer_speed.is_finite() && self.pointer_speed > 0.0) {
            return Err(InputError::InvalidPointerSpeed(self.pointer_speed));
        }
        let (min, max) = (self.min_polar_angle, self.max_polar_angle);
        if !(min >= 0.0 && min < max && max <= PI) {
            return Err(InputError::InvalidPolarRange { min, max });
        }
        Ok(())
    }
}

/// Yaw/pitch view rotation driven by relative mouse motion.
///
/// Rotation order is yaw about world Y, then pitch about the local X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LookControls {
    config: LookConfig,
    yaw: f32,
    pitch: f32,
}

impl LookControls {
    pub fn new(config: LookConfig) -> Self {
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a relative mouse motion in pixels.
    ///
    /// Moving right turns right, moving down looks down.
    pub fn mouse_move(&mut self, dx: f32, dy: f32) {
        let scale = RADIANS_PER_PIXEL * self.config.pointer_speed;
        self.yaw -= dx * scale;
        self.pitch -= dy * scale;
        // Not `clamp`: it panics on an inverted, unvalidated range.
        self.pitch = self
            .pitch
            .max(FRAC_PI_2 - self.config.max_polar_angle)
            .min(FRAC_PI_2 - self.config.min_polar_angle);
    }

    /// The current look rotation.
    pub fn quaternion(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

impl Default for LookControls {
    fn default() -> Self {
        Self::new(LookConfig::default())
    }
}
