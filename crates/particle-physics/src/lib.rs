//! # Particle Physics Engine
//!
//! Kinematics for spheres bouncing inside an axis-aligned cube: gravity that
//! follows the cube's orientation, wall contacts with restitution, and
//! pairwise sphere contacts with impulse response and de-penetration.

pub mod collision;
pub mod constants;
pub mod error;
pub mod kinematics;
pub mod orientation;
pub mod particle;

pub use collision::*;
pub use constants::*;
pub use error::*;
pub use kinematics::*;
pub use orientation::*;
pub use particle::*;
