//! Cube orientation derived from accumulated drag angles

use glam::{Mat3, Mat4};

/// Rotation applied to the gravity direction.
///
/// Only the linear part matters, so a 3x3 matrix is enough.
pub type RotationTransform = Mat3;

/// Accumulated pitch/yaw of the cube in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about X, driven by vertical drag
    pub pitch_degrees: f32,
    /// Rotation about Y, driven by horizontal drag
    pub yaw_degrees: f32,
}

impl Orientation {
    pub fn new(pitch_degrees: f32, yaw_degrees: f32) -> Self {
        Self {
            pitch_degrees,
            yaw_degrees,
        }
    }

    /// Rotation matrix: pitch about X first, then yaw about Y.
    pub fn rotation(&self) -> RotationTransform {
        Mat3::from_rotation_x(self.pitch_degrees.to_radians())
            * Mat3::from_rotation_y(self.yaw_degrees.to_radians())
    }

    /// Homogeneous model matrix for the renderer.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_mat3(self.rotation())
    }

    pub fn is_finite(&self) -> bool {
        self.pitch_degrees.is_finite() && self.yaw_degrees.is_finite()
    }
}
