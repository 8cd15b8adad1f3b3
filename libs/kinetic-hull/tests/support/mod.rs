//! Point generators and hull checks shared by the integration tests.

#![allow(dead_code)]

use std::f64::consts::PI;

use config::constants::HullConfig;
use glam::DVec3;
use kinetic_hull::perturb::Perturbation;
use kinetic_hull::point::indexed;
use kinetic_hull::{validate, ConvexHull};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Corners of the axis-aligned cube `[0, size]^3`.
pub fn cube(size: f64) -> Vec<DVec3> {
    (0..8)
        .map(|i| {
            DVec3::new(
                (i & 1) as f64 * size,
                ((i >> 1) & 1) as f64 * size,
                ((i >> 2) & 1) as f64 * size,
            )
        })
        .collect()
}

/// The six unit axis points.
pub fn octahedron() -> Vec<DVec3> {
    vec![
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ]
}

/// Points uniformly distributed on the unit sphere.
pub fn sphere_points(n: usize, seed: u64) -> Vec<DVec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let z: f64 = rng.gen_range(-1.0..1.0);
            let theta: f64 = rng.gen_range(0.0..2.0 * PI);
            let r = (1.0 - z * z).sqrt();
            DVec3::new(r * theta.cos(), r * theta.sin(), z)
        })
        .collect()
}

/// Points uniformly distributed in the cube `[-1, 1]^3`.
pub fn box_points(n: usize, seed: u64) -> Vec<DVec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect()
}

/// Integer points in `[-extent, extent]^3`; repeats are likely.
pub fn lattice_points(n: usize, extent: i32, seed: u64) -> Vec<DVec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            DVec3::new(
                rng.gen_range(-extent..=extent) as f64,
                rng.gen_range(-extent..=extent) as f64,
                rng.gen_range(-extent..=extent) as f64,
            )
        })
        .collect()
}

/// Integer grid `[-extent, extent]^2` lifted onto `z = x² + y²`.
pub fn lifted_grid(extent: i32) -> Vec<DVec3> {
    (-extent..=extent)
        .flat_map(|x| (-extent..=extent).map(move |y| (x as f64, y as f64)))
        .map(|(x, y)| DVec3::new(x, y, x * x + y * y))
        .collect()
}

/// Perturbed coordinates the hull of `positions` is built from, by id.
pub fn working_positions(positions: &[DVec3], config: &HullConfig) -> Vec<DVec3> {
    Perturbation::from_config(config).apply(&indexed(positions))
}

/// A random permutation of `0..n`.
pub fn permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    order
}

/// Asserts closure, convexity within `slack * scale` and Euler's count.
pub fn assert_valid(hull: &ConvexHull, positions: &[DVec3], slack: f64) {
    let scale = positions
        .iter()
        .map(|p| p.abs().max_element())
        .fold(1e-300, f64::max);
    validate::check_closed(hull.facets()).unwrap();
    validate::check_convex(hull.facets(), positions, slack * scale).unwrap();
    validate::check_euler(hull.facets()).unwrap();
}
