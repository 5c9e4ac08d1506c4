//! Simulation parameters for runtime tuning

use particle_physics::{
    Kinematics, PhysicsError, CUBE_HALF_EXTENT, GRAVITY, PAIR_RESTITUTION, PARTICLE_RADIUS,
    TOP_WALL_BIAS, WALL_RESTITUTION,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    // Gravity & walls
    pub gravity: f32,
    pub wall_restitution: f32,
    pub top_wall_bias: f32,
    pub half_extent: f32,

    // Particles
    pub particle_radius: f32,
    pub particle_collisions: bool,
    pub pair_restitution: f32,

    // Frame timing: larger deltas are clamped to this (seconds)
    pub max_frame_delta: f32,

    // Input: degrees of rotation per pixel of drag
    pub drag_sensitivity: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            wall_restitution: WALL_RESTITUTION,
            top_wall_bias: TOP_WALL_BIAS,
            half_extent: CUBE_HALF_EXTENT,
            particle_radius: PARTICLE_RADIUS,
            particle_collisions: true,
            pair_restitution: PAIR_RESTITUTION,
            max_frame_delta: 0.05,
            drag_sensitivity: 0.5,
        }
    }
}

impl SimulationParams {
    /// Reject settings the kinematics can't work with.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let finite = [
            ("gravity", self.gravity),
            ("top_wall_bias", self.top_wall_bias),
            ("drag_sensitivity", self.drag_sensitivity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PhysicsError::InvalidParameter { name, value });
            }
        }

        for restitution in [self.wall_restitution, self.pair_restitution] {
            if !(0.0..=1.0).contains(&restitution) {
                return Err(PhysicsError::InvalidRestitution(restitution));
            }
        }

        if !(self.half_extent > 0.0) || !self.half_extent.is_finite() {
            return Err(PhysicsError::InvalidParameter {
                name: "half_extent",
                value: self.half_extent,
            });
        }
        if !(self.max_frame_delta > 0.0) || !self.max_frame_delta.is_finite() {
            return Err(PhysicsError::InvalidParameter {
                name: "max_frame_delta",
                value: self.max_frame_delta,
            });
        }
        if self.top_wall_bias < 0.0 {
            return Err(PhysicsError::InvalidParameter {
                name: "top_wall_bias",
                value: self.top_wall_bias,
            });
        }

        self.check_radius(self.particle_radius)
    }

    /// A radius must be positive and leave room to move inside the cube.
    pub fn check_radius(&self, radius: f32) -> Result<(), PhysicsError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }
        if radius >= self.half_extent {
            return Err(PhysicsError::RadiusExceedsCube {
                radius,
                half_extent: self.half_extent,
            });
        }
        Ok(())
    }

    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            gravity: self.gravity,
            restitution: self.wall_restitution,
            top_bias: self.top_wall_bias,
            half_extent: self.half_extent,
        }
    }
}
