use glam::{Mat4, Vec3};
use gravfield_common::Pose;

/// Perspective camera parameters owned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    /// Track a viewport resize. Zero-sized viewports keep the previous aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// World-to-view transform for a pose, using the pose's own up vector.
    pub fn view_matrix(pose: &Pose) -> Mat4 {
        let up = pose.orientation * Vec3::Y;
        Mat4::look_to_rh(pose.position, pose.forward(), up)
    }

    pub fn view_projection(&self, pose: &Pose) -> Mat4 {
        self.projection_matrix() * Self::view_matrix(pose)
    }
}
