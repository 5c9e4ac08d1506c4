//! Per-particle instance data

use bytemuck::{Pod, Zeroable};
use particle_physics::Particle;

/// GPU-compatible instance record: where to draw a sphere, how big, what color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _padding: f32,
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.position.to_array(),
            radius: particle.radius(),
            color: particle.color,
            _padding: 0.0,
        }
    }
}
