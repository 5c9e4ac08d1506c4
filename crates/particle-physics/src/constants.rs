//! Physical constants for the cube simulation
//!
//! Reference values in simulation units (the cube spans one unit on each axis).

/// Gravitational acceleration along local -Y
pub const GRAVITY: f32 = -1.8;

/// Half the edge length of the bounding cube (centered at the origin)
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Fraction of normal velocity kept after a wall bounce
pub const WALL_RESTITUTION: f32 = 0.5;

/// Restitution between two particles (fully inelastic along the normal)
pub const PAIR_RESTITUTION: f32 = 0.0;

/// Inward offset applied when clamping against the top face,
/// so rounding doesn't re-trigger the contact next frame
pub const TOP_WALL_BIAS: f32 = 0.001;

/// Default particle radius
pub const PARTICLE_RADIUS: f32 = 0.05;

/// Speed at which the speed-derived color saturates to full red
pub const COLOR_SPEED_SCALE: f32 = 10.0;

/// Color of a particle that has not been updated yet
pub const INITIAL_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
