// Host-side tests for hero mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/geometry.rs");
}

use geometry::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn icosahedron_base_counts() {
    let mesh = icosphere(10.0, 0);
    assert_eq!(mesh.positions.len(), 12);
    assert_eq!(mesh.triangle_count(), 20);
    assert_eq!(wireframe_edges(&mesh).len(), 30 * 2);
}

#[test]
fn icosphere_subdivision_counts() {
    // Each subdivision quadruples the faces; V = E - F + 2 (Euler).
    let mesh = icosphere(10.0, 2);
    assert_eq!(mesh.triangle_count(), 320);
    assert_eq!(mesh.positions.len(), 162);
    assert_eq!(wireframe_edges(&mesh).len(), 480 * 2);
}

#[test]
fn icosphere_vertices_lie_on_the_sphere() {
    let mesh = icosphere(10.0, 2);
    for p in &mesh.positions {
        assert!((p.length() - 10.0).abs() < 1e-3, "vertex off sphere: {:?}", p);
    }
}

#[test]
fn icosphere_indices_are_in_range() {
    let mesh = icosphere(10.0, 2);
    let n = mesh.positions.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn torus_grid_counts() {
    let mesh = torus(14.0, 0.05, 16, 100);
    assert_eq!(mesh.positions.len(), 17 * 101);
    assert_eq!(mesh.triangle_count(), 16 * 100 * 2);
}

#[test]
fn torus_points_stay_on_the_tube() {
    let (radius, tube) = (15.0_f32, 0.02_f32);
    let mesh = torus(radius, tube, 16, 100);
    for p in &mesh.positions {
        let ring_dist = (p.x * p.x + p.y * p.y).sqrt();
        assert!(ring_dist >= radius - tube - 1e-4);
        assert!(ring_dist <= radius + tube + 1e-4);
        assert!(p.z.abs() <= tube + 1e-4);
    }
}

#[test]
fn scatter_fills_the_centered_cube() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = scatter_cube(&mut rng, 300, 40.0);
    assert_eq!(points.len(), 300);
    for p in &points {
        assert!(p.x.abs() <= 20.0 && p.y.abs() <= 20.0 && p.z.abs() <= 20.0);
    }
    // Not degenerate: the scatter should actually spread out.
    let spread = points.iter().map(|p| p.length()).fold(0.0_f32, f32::max);
    assert!(spread > 10.0);
}
