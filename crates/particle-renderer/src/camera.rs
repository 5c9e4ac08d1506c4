//! Camera system for viewing the cube

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use particle_physics::Orientation;

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _padding: f32,
}

/// Fixed camera looking at the cube from +Z
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width as f32 / height.max(1) as f32,
            fovy: 45.0_f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// View-projection with the cube's orientation applied as the model matrix.
    pub fn build_model_view_projection(&self, orientation: &Orientation) -> Mat4 {
        self.build_view_projection_matrix() * orientation.model_matrix()
    }

    pub fn to_uniform(&self, orientation: &Orientation) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
            model: orientation.model_matrix().to_cols_array_2d(),
            position: self.eye.to_array(),
            _padding: 0.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
