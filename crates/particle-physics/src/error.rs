//! Error type shared by construction, configuration and the step boundary

/// Precondition violations rejected at a call or construction boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    #[error("particle radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("particle radius {radius} does not fit inside a cube of half-extent {half_extent}")]
    RadiusExceedsCube { radius: f32, half_extent: f32 },
    #[error("particle position is not finite: {0:?}")]
    NonFinitePosition([f32; 3]),
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f32),
    #[error("time step is not finite: {0}")]
    NonFiniteTimeStep(f32),
    #[error("time step must not be negative, got {0}")]
    NegativeTimeStep(f32),
    #[error("rotation transform is not finite")]
    NonFiniteRotation,
    #[error("particle {index} has a non-finite position or velocity")]
    NonFiniteState { index: usize },
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("could not find a free spot for particle {index}")]
    CannotPlaceParticle { index: usize },
}
