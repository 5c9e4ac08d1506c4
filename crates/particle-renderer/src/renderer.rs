//! Particle rendering system
//!
//! Collects everything a GPU backend needs for one frame: the camera uniform,
//! one instance record per particle, and the static cube/sphere meshes.

use particle_physics::{Orientation, Particle};
use particle_simulation::Renderer;

use crate::camera::{Camera, CameraUniform};
use crate::geometry::{cube_wireframe, particle_sphere, Mesh};
use crate::instance::ParticleInstance;

/// Frames between debug summaries
const LOG_INTERVAL: u64 = 120;

pub struct InstanceRenderer {
    pub camera: Camera,
    cube: Mesh,
    sphere: Mesh,
    instances: Vec<ParticleInstance>,
    camera_uniform: CameraUniform,
    frame_counter: u64,
}

impl InstanceRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        let camera = Camera::new(width, height);
        let camera_uniform = camera.to_uniform(&Orientation::default());
        let cube = cube_wireframe();
        let sphere = particle_sphere();

        log::info!(
            "Renderer ready: cube {} lines, sphere {} vertices / {} triangles",
            cube.indices.len() / 2,
            sphere.vertices.len(),
            sphere.indices.len() / 3
        );

        Self {
            camera,
            cube,
            sphere,
            instances: Vec::new(),
            camera_uniform,
            frame_counter: 0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    /// Instance buffer contents for upload.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.camera_uniform
    }

    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera_uniform)
    }

    pub fn cube_mesh(&self) -> &Mesh {
        &self.cube
    }

    pub fn sphere_mesh(&self) -> &Mesh {
        &self.sphere
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }
}

impl Renderer for InstanceRenderer {
    fn render(&mut self, orientation: &Orientation, particles: &[Particle]) {
        self.camera_uniform = self.camera.to_uniform(orientation);

        self.instances.clear();
        self.instances.extend(particles.iter().map(ParticleInstance::from));

        self.frame_counter += 1;
        if self.frame_counter % LOG_INTERVAL == 0 {
            let max_speed = particles
                .iter()
                .map(Particle::speed)
                .fold(0.0_f32, f32::max);
            log::debug!(
                "frame {}: {} instances, pitch={:.1}°, yaw={:.1}°, max speed={:.3}",
                self.frame_counter,
                self.instances.len(),
                orientation.pitch_degrees,
                orientation.yaw_degrees,
                max_speed
            );
        }
    }
}
