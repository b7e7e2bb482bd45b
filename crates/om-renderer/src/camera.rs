//! Dolly camera for the menu sphere
//!
//! The camera sits on the +Z axis looking at the origin and only ever
//! moves along that axis: the orchestrator eases its distance outward
//! while the sphere spins fast and back in as it settles.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::constants::camera;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

/// Axis-locked dolly camera
#[derive(Debug, Clone)]
pub struct MenuCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl MenuCamera {
    /// Create a camera at the resting distance
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, camera::BASE_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: camera::FOV,
            aspect,
            near: camera::NEAR,
            far: camera::FAR,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Ease the camera distance toward `target_z`
    ///
    /// `damping` is the divisor of the remaining gap consumed this
    /// frame; larger values ease more slowly.
    pub fn ease_distance(&mut self, target_z: f32, damping: f32) {
        if damping > 0.0 {
            self.position.z += (target_z - self.position.z) / damping;
        }
    }

    /// Current distance along the view axis
    pub fn distance(&self) -> f32 {
        self.position.z
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_converges_on_target() {
        let mut cam = MenuCamera::new(1.0);
        for _ in 0..200 {
            cam.ease_distance(6.0, 5.0);
        }
        assert!((cam.distance() - 6.0).abs() < 0.01);
    }

    #[test]
    fn test_easing_never_overshoots() {
        let mut cam = MenuCamera::new(1.0);
        let start = cam.distance();
        let mut previous = start;
        for _ in 0..50 {
            cam.ease_distance(6.0, 5.0);
            assert!(cam.distance() >= previous);
            assert!(cam.distance() <= 6.0);
            previous = cam.distance();
        }
    }

    #[test]
    fn test_uniform_projects_origin_to_center() {
        let cam = MenuCamera::new(16.0 / 9.0);
        let clip = Mat4::from_cols_array_2d(&cam.uniform().view_proj)
            * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }
}
