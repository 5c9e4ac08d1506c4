//! Particles in a Cube
//!
//! Headless frame driver: spheres fall under gravity inside a unit cube while
//! a scripted drag gesture tilts the cube, redirecting gravity.

use glam::Vec3;
use particle_renderer::InstanceRenderer;
use particle_simulation::{DragRotation, FrameDriver, Simulation, SimulationParams};
use std::process::ExitCode;
use std::time::Instant;

const EXTRA_PARTICLES: usize = 11;
const FRAME_RATE: f64 = 60.0;
const FRAME_COUNT: u64 = 1200;

/// Drag gesture: (frame, cursor x, cursor y) keyframes in window pixels
const DRAG_START: (u64, f64, f64) = (240, 400.0, 300.0);
const DRAG_END: (u64, f64, f64) = (480, 520.0, 420.0);

/// Feed the scripted drag into the input model for `frame`.
fn script_drag(input: &mut DragRotation, frame: u64) {
    let (start, x0, y0) = DRAG_START;
    let (end, x1, y1) = DRAG_END;

    if frame == start {
        input.press(x0, y0);
        log::info!("Drag started at ({x0}, {y0})");
    } else if frame > start && frame < end {
        let t = (frame - start) as f64 / (end - start) as f64;
        input.cursor_moved(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
    } else if frame == end {
        input.cursor_moved(x1, y1);
        input.release();
        let orientation = input.current();
        log::info!(
            "Drag released: pitch={:.1}°, yaw={:.1}°",
            orientation.pitch_degrees,
            orientation.yaw_degrees
        );
    }
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting cube particle simulation...");

    let params = SimulationParams::default();
    let mut simulation = match Simulation::new(params) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("Invalid simulation parameters: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::rng();
    let spawned = simulation
        .add_particle(Vec3::ZERO)
        .and_then(|_| simulation.spawn_random(&mut rng, EXTRA_PARTICLES));
    if let Err(err) = spawned {
        log::error!("Failed to spawn particles: {err}");
        return ExitCode::FAILURE;
    }
    log::info!("✓ {} particles in the cube", simulation.len());

    let input = DragRotation::new(params.drag_sensitivity);
    let renderer = InstanceRenderer::new(800, 600);
    let mut driver = FrameDriver::new(simulation, input, renderer);

    let started = Instant::now();
    let mut wall_contacts = 0;
    let mut pair_contacts = 0;

    for frame in 0..FRAME_COUNT {
        script_drag(driver.input_mut(), frame);

        let timestamp = frame as f64 / FRAME_RATE;
        match driver.frame(timestamp) {
            Ok(stats) => {
                wall_contacts += stats.wall_contacts;
                pair_contacts += stats.pair_contacts;
            }
            Err(err) => {
                log::error!("Simulation halted at frame {frame}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let elapsed = started.elapsed();
    let simulation = driver.simulation();
    log::info!(
        "✓ {} frames ({:.1}s simulated) in {:.2?}",
        driver.frames(),
        FRAME_COUNT as f64 / FRAME_RATE,
        elapsed
    );
    log::info!("  wall contacts: {wall_contacts}, pair contacts: {pair_contacts}");
    log::info!("  kinetic energy: {:.5}", simulation.kinetic_energy());
    for (i, p) in simulation.particles().iter().enumerate() {
        log::info!(
            "    [{}] position={:.3}, speed={:.3}, color={:?}",
            i,
            p.position,
            p.speed(),
            p.color
        );
    }
    log::info!(
        "  instance buffer: {} bytes",
        driver.renderer().instance_bytes().len()
    );

    ExitCode::SUCCESS
}
