//! # Particle Renderer
//!
//! Renderer-side data for the cube simulation: camera matrices, cube and
//! sphere vertex buffers, and per-particle instance records. No draw calls
//! are issued here; a GPU backend uploads these buffers as-is.

pub mod camera;
pub mod geometry;
pub mod instance;
pub mod renderer;

pub use camera::*;
pub use geometry::*;
pub use instance::*;
pub use renderer::*;
