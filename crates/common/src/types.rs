use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The fixed world-space up axis. Surface alignment is measured against it.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Camera-equivalent pose: where the player is, which way is up, how it is turned.
///
/// `orientation` is the composed visual rotation (surface alignment first,
/// then look input). `up` is the surface normal the player last aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub up: Vec3,
    pub orientation: Quat,
}

impl Pose {
    /// A pose at `position` with world up and no rotation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Unit vector the pose is looking along (-Z rotated by the orientation).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            up: WORLD_UP,
            orientation: Quat::IDENTITY,
        }
    }
}

/// Snapshot of the button and key state for one frame.
///
/// Owned by the input collaborator; the kernel only reads copies of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,

    pub click_left: bool,
    pub click_right: bool,
}

impl InputState {
    /// Raw movement intent `(right - left, up - down, backward - forward)`.
    ///
    /// Not normalized. Opposing keys cancel out to zero on that axis.
    pub fn intent(&self) -> Vec3 {
        fn axis(pos: bool, neg: bool) -> f32 {
            f32::from(u8::from(pos)) - f32::from(u8::from(neg))
        }
        Vec3::new(
            axis(self.move_right, self.move_left),
            axis(self.move_up, self.move_down),
            axis(self.move_backward, self.move_forward),
        )
    }

    /// True when any of the six movement flags is held.
    pub fn any_movement(&self) -> bool {
        self.move_forward
            || self.move_backward
            || self.move_left
            || self.move_right
            || self.move_up
            || self.move_down
    }
}
