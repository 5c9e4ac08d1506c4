//! # Particle Simulation Engine
//!
//! Owns the particles in the cube and steps them frame by frame. Input and
//! rendering are collaborators behind the [`InputSource`] and [`Renderer`]
//! traits; all per-frame state is passed explicitly through [`FrameDriver`].

pub mod clock;
pub mod driver;
pub mod input;
pub mod params;
pub mod simulation;

pub use clock::*;
pub use driver::*;
pub use input::*;
pub use params::*;
pub use simulation::*;
