//! Vertex and index buffers for the cube outline and particle spheres

use bytemuck::{Pod, Zeroable};
use particle_physics::CUBE_HALF_EXTENT;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed mesh, drawn as a line list or triangle list depending on the producer.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Cube edges as pairs of corner indices
#[rustfmt::skip]
const CUBE_EDGES: [[u16; 2]; 12] = [
    // Front face
    [0, 1], [1, 2], [2, 3], [3, 0],
    // Back face
    [4, 5], [5, 6], [6, 7], [7, 4],
    // Connecting edges
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// Wireframe of the bounding cube as a line list (8 corners, 12 edges).
pub fn cube_wireframe() -> Mesh {
    let h = CUBE_HALF_EXTENT;
    let corners = [
        [-h, -h, h],  // front-bottom-left
        [h, -h, h],   // front-bottom-right
        [h, h, h],    // front-top-right
        [-h, h, h],   // front-top-left
        [-h, -h, -h], // back-bottom-left
        [h, -h, -h],  // back-bottom-right
        [h, h, -h],   // back-top-right
        [-h, h, -h],  // back-top-left
    ];

    let vertices = corners
        .iter()
        .map(|&position| {
            let n = glam::Vec3::from_array(position).normalize();
            Vertex {
                position,
                normal: n.to_array(),
            }
        })
        .collect();

    Mesh {
        vertices,
        indices: CUBE_EDGES.iter().flatten().copied().collect(),
    }
}

/// Largest slice or stack count; `255 * 255` vertices still fit `u16` indices.
pub const MAX_TESSELLATION: u16 = 254;

/// UV sphere centered at the origin as a triangle list.
///
/// Produces `(stacks + 1) * (slices + 1)` vertices; the seam column is
/// duplicated so texture coordinates could wrap cleanly. Counts are clamped
/// to `3..=MAX_TESSELLATION` slices and `2..=MAX_TESSELLATION` stacks.
pub fn uv_sphere(radius: f32, slices: u16, stacks: u16) -> Mesh {
    let slices = slices.clamp(3, MAX_TESSELLATION);
    let stacks = stacks.clamp(2, MAX_TESSELLATION);

    let mut vertices = Vec::with_capacity((stacks as usize + 1) * (slices as usize + 1));
    for i in 0..=stacks {
        let lat = PI * (-0.5 + i as f32 / stacks as f32);
        let (z, ring) = lat.sin_cos();
        for j in 0..=slices {
            let lng = TAU * j as f32 / slices as f32;
            let (y, x) = lng.sin_cos();
            let normal = [x * ring, y * ring, z];
            vertices.push(Vertex {
                position: normal.map(|c| c * radius),
                normal,
            });
        }
    }

    let row = slices + 1;
    let mut indices = Vec::with_capacity(stacks as usize * slices as usize * 6);
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * row + j;
            let b = a + row;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Mesh { vertices, indices }
}

/// Unit sphere at the reference tessellation, scaled per instance.
pub fn particle_sphere() -> Mesh {
    uv_sphere(1.0, 16, 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_wireframe() {
        let cube = cube_wireframe();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.indices.len(), 24);
        for v in &cube.vertices {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
        // Every edge joins corners that differ on exactly one axis
        for edge in cube.indices.chunks(2) {
            let a = cube.vertices[edge[0] as usize].position;
            let b = cube.vertices[edge[1] as usize].position;
            let differing = (0..3).filter(|&k| a[k] != b[k]).count();
            assert_eq!(differing, 1, "edge {edge:?}");
        }
    }

    #[test]
    fn test_sphere_counts() {
        let sphere = particle_sphere();
        assert_eq!(sphere.vertices.len(), 17 * 17);
        assert_eq!(sphere.indices.len(), 16 * 16 * 6);
        let max = *sphere.indices.iter().max().unwrap() as usize;
        assert!(max < sphere.vertices.len());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let sphere = uv_sphere(0.05, 8, 6);
        for v in &sphere.vertices {
            let length = glam::Vec3::from_array(v.position).length();
            assert!((length - 0.05).abs() < 1e-6);
            let normal = glam::Vec3::from_array(v.normal).length();
            assert!((normal - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_tessellation_clamped() {
        let sphere = uv_sphere(1.0, 0, 0);
        assert_eq!(sphere.vertices.len(), 3 * 4);
        assert!(!sphere.indices.is_empty());
    }

    #[test]
    fn test_dense_tessellation_fits_u16_indices() {
        let sphere = uv_sphere(1.0, 300, u16::MAX);
        let side = MAX_TESSELLATION as usize + 1;
        assert_eq!(sphere.vertices.len(), side * side);
        assert!(sphere.vertices.len() <= u16::MAX as usize + 1);

        let max_index = sphere.indices.iter().copied().max().unwrap();
        assert_eq!(max_index as usize, sphere.vertices.len() - 1);
    }

    #[test]
    fn test_byte_views() {
        let cube = cube_wireframe();
        assert_eq!(cube.vertex_bytes().len(), 8 * 24);
        assert_eq!(cube.index_bytes().len(), 24 * 2);
    }
}
