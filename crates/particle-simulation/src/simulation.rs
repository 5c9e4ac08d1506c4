//! CPU particle simulation manager
//!
//! Each step: gravity + position + wall contacts per particle, then every
//! overlapping pair is resolved once. Particles are addressed by the index
//! they were added at; nothing is ever removed.

use glam::Vec3;
use particle_physics::{resolve_all, Kinematics, Orientation, Particle, PhysicsError};
use rand::Rng;

use crate::SimulationParams;

/// Stable handle to a particle in a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(pub usize);

/// Contacts resolved during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub wall_contacts: usize,
    pub pair_contacts: usize,
}

/// Rejection-sampling attempts per particle before giving up.
const MAX_SPAWN_ATTEMPTS: usize = 1000;

pub struct Simulation {
    params: SimulationParams,
    kinematics: Kinematics,
    particles: Vec<Particle>,
    steps: u64,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Result<Self, PhysicsError> {
        params.validate()?;
        log::info!("Initializing Simulation...");
        log::debug!("  params: {params:?}");

        Ok(Self {
            kinematics: params.kinematics(),
            params,
            particles: Vec::new(),
            steps: 0,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0)
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of steps that advanced time.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Add a stationary particle with the configured radius.
    pub fn add_particle(&mut self, position: Vec3) -> Result<ParticleId, PhysicsError> {
        self.add_particle_with_radius(position, self.params.particle_radius)
    }

    pub fn add_particle_with_radius(
        &mut self,
        position: Vec3,
        radius: f32,
    ) -> Result<ParticleId, PhysicsError> {
        self.params.check_radius(radius)?;
        let particle = Particle::new(position, radius)?;
        self.particles.push(particle);
        Ok(ParticleId(self.particles.len() - 1))
    }

    /// Scatter `count` stationary, non-overlapping particles inside the cube.
    pub fn spawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<ParticleId>, PhysicsError> {
        let radius = self.params.particle_radius;
        let limit = self.params.half_extent - radius;
        let mut ids = Vec::with_capacity(count);

        for _ in 0..count {
            let index = self.particles.len();
            let position = (0..MAX_SPAWN_ATTEMPTS)
                .map(|_| {
                    Vec3::new(
                        rng.random_range(-limit..=limit),
                        rng.random_range(-limit..=limit),
                        rng.random_range(-limit..=limit),
                    )
                })
                .find(|candidate| {
                    self.particles.iter().all(|p| {
                        let min_distance = p.radius() + radius;
                        p.position.distance_squared(*candidate) >= min_distance * min_distance
                    })
                })
                .ok_or(PhysicsError::CannotPlaceParticle { index })?;

            ids.push(self.add_particle(position)?);
        }

        log::info!("✓ Spawned {} particles (radius {:.3})", count, radius);
        Ok(ids)
    }

    /// Advance the simulation by `delta_time` seconds under `orientation`.
    ///
    /// A zero delta is a no-op. Negative or non-finite deltas, a non-finite
    /// orientation and a particle already in a non-finite state are rejected
    /// before any state is touched. A particle that ends the step non-finite
    /// is reported as a fatal error as well.
    pub fn step(
        &mut self,
        delta_time: f32,
        orientation: &Orientation,
    ) -> Result<StepStats, PhysicsError> {
        if !delta_time.is_finite() {
            return Err(PhysicsError::NonFiniteTimeStep(delta_time));
        }
        if delta_time < 0.0 {
            return Err(PhysicsError::NegativeTimeStep(delta_time));
        }
        if !orientation.is_finite() {
            return Err(PhysicsError::NonFiniteRotation);
        }
        self.check_finite()?;
        if delta_time == 0.0 {
            return Ok(StepStats::default());
        }

        let rotation = orientation.rotation();
        let mut stats = StepStats::default();

        for particle in &mut self.particles {
            let contacts = particle.step(delta_time, &rotation, &self.kinematics);
            stats.wall_contacts += contacts.count();
        }

        if self.params.particle_collisions {
            stats.pair_contacts = resolve_all(&mut self.particles, self.params.pair_restitution);
        }

        self.check_finite()?;
        self.steps += 1;
        Ok(stats)
    }

    /// First particle with a non-finite position or velocity, as an error.
    fn check_finite(&self) -> Result<(), PhysicsError> {
        match self.particles.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(PhysicsError::NonFiniteState { index }),
            None => Ok(()),
        }
    }

    /// Total kinetic energy with unit masses.
    pub fn kinetic_energy(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| 0.5 * p.velocity.length_squared())
            .sum()
    }
}
