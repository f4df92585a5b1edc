// Mesh generation for the hero scene: subdivided icosphere (globe and its
// occluder shell), torus rings, unique-edge wireframe extraction and the
// particle scatter. Pure math, exercised by the host-side tests.

use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use rand::Rng;

/// Triangle-list mesh with positions only; the hero shades everything with
/// flat uniform colors.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Icosahedron subdivided `subdivisions` times, vertices re-projected onto
/// a sphere of the given radius. Midpoints are deduplicated through an
/// `FnvHashMap` so shared edges split into shared vertices.
pub fn icosphere(radius: f32, subdivisions: u32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
    .collect();

    let mut indices: Vec<u32> = vec![
        0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
        1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
        3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
        4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
    ];

    for _ in 0..subdivisions {
        let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut next = Vec::with_capacity(indices.len() * 4);
        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let mid = (positions[a as usize] + positions[b as usize]) * 0.5;
                positions.push(mid.normalize() * radius);
                (positions.len() - 1) as u32
            })
        };
        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);
            next.extend_from_slice(&[a, ab, ca, b, bc, ab, c, ca, bc, ab, bc, ca]);
        }
        indices = next;
    }

    Mesh { positions, indices }
}

/// Extract the unique undirected edges of a triangle mesh as a line-list
/// vertex stream (two endpoints per edge).
pub fn wireframe_edges(mesh: &Mesh) -> Vec<Vec3> {
    let mut edges: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    for tri in mesh.indices.chunks_exact(3) {
        for &(a, b) in &[(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            edges.insert((a.min(b), a.max(b)));
        }
    }
    let mut lines = Vec::with_capacity(edges.len() * 2);
    for (a, b) in edges {
        lines.push(mesh.positions[a as usize]);
        lines.push(mesh.positions[b as usize]);
    }
    lines
}

/// Torus in the XY plane (the rings are tilted into place by their
/// transforms): `radial_segments` around the tube, `tubular_segments`
/// around the ring.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let mut positions =
        Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);
    for j in 0..=radial_segments {
        let theta = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
        for i in 0..=tubular_segments {
            let phi = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
            let r = radius + tube * theta.cos();
            positions.push(Vec3::new(r * phi.cos(), r * phi.sin(), tube * theta.sin()));
        }
    }

    let stride = tubular_segments + 1;
    let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = j * stride + i;
            let b = (j + 1) * stride + i;
            let c = (j + 1) * stride + i + 1;
            let d = j * stride + i + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Mesh { positions, indices }
}

/// Uniform scatter inside a centered cube of the given edge length.
pub fn scatter_cube(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}
