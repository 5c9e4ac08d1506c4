//! Per-frame orchestration: input -> orientation -> physics -> render

use particle_physics::{Orientation, Particle, PhysicsError};

use crate::{FrameClock, InputSource, Simulation, StepStats};

/// Consumes particle state once per frame after physics has finished.
///
/// Implementations only read; they never write back into the simulation.
pub trait Renderer {
    fn render(&mut self, orientation: &Orientation, particles: &[Particle]);
}

/// Drives one simulation, one input source and one renderer.
pub struct FrameDriver<I, R> {
    simulation: Simulation,
    input: I,
    renderer: R,
    clock: FrameClock,
    frames: u64,
}

impl<I: InputSource, R: Renderer> FrameDriver<I, R> {
    pub fn new(simulation: Simulation, input: I, renderer: R) -> Self {
        let clock = FrameClock::new(simulation.params().max_frame_delta);
        Self {
            simulation,
            input,
            renderer,
            clock,
            frames: 0,
        }
    }

    /// Run one frame for the given timestamp (seconds).
    pub fn frame(&mut self, now: f64) -> Result<StepStats, PhysicsError> {
        let delta_time = self.clock.tick(now);
        let orientation = self.input.orientation();

        let stats = self.simulation.step(delta_time, &orientation)?;
        self.renderer.render(&orientation, self.simulation.particles());

        self.frames += 1;
        Ok(stats)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (Simulation, I, R) {
        (self.simulation, self.input, self.renderer)
    }
}
