//! # Perturbation
//!
//! Moves input points into general position before sorting.
//!
//! ## Steps
//!
//! 1. Offset every coordinate by a seeded jitter of at most
//!    `jitter * scale`, drawn in id order
//! 2. Rotate by `angle` in the XY, XZ and YZ planes, in that order
//!
//! The jitter breaks exact coplanarity; the rotation separates equal x
//! coordinates and equal XY projections. Working coordinates are used for
//! topology only; callers measuring geometry use the original positions.

use config::constants::HullConfig;
use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::point::{coordinate_scale, HullPoint};

/// Parameters of the working-coordinate transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// Rotation angle in radians.
    pub angle: f64,
    /// Relative jitter magnitude.
    pub jitter: f64,
    /// Jitter generator seed.
    pub seed: u64,
}

impl Perturbation {
    /// Takes the perturbation settings from a hull configuration.
    pub fn from_config(config: &HullConfig) -> Self {
        Self {
            angle: config.perturbation_angle,
            jitter: config.perturbation_jitter,
            seed: config.seed,
        }
    }

    /// No-op transform.
    pub fn identity() -> Self {
        Self {
            angle: 0.0,
            jitter: 0.0,
            seed: 0,
        }
    }

    /// Returns the working position of every point, in input order.
    ///
    /// Offsets depend only on the seed and the id, so reordering the input
    /// does not change any working position.
    pub fn apply(&self, points: &[HullPoint]) -> Vec<DVec3> {
        let scale = coordinate_scale(points.iter().map(|p| &p.position));

        let mut offsets = vec![DVec3::ZERO; points.len()];
        if self.jitter > 0.0 {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            let magnitude = self.jitter * scale;
            for offset in offsets.iter_mut() {
                *offset = DVec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                ) * magnitude;
            }
        }

        points
            .iter()
            .map(|point| {
                let offset = offsets.get(point.id).copied().unwrap_or(DVec3::ZERO);
                self.rotate(point.position + offset)
            })
            .collect()
    }

    /// Applies the three plane rotations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use kinetic_hull::perturb::Perturbation;
    ///
    /// let p = DVec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Perturbation::identity().rotate(p), p);
    /// ```
    pub fn rotate(&self, position: DVec3) -> DVec3 {
        if self.angle == 0.0 {
            return position;
        }
        let (s, c) = self.angle.sin_cos();
        let DVec3 { mut x, mut y, mut z } = position;
        (x, y) = (x * c - y * s, x * s + y * c);
        (x, z) = (x * c - z * s, x * s + z * c);
        (y, z) = (y * c - z * s, y * s + z * c);
        DVec3::new(x, y, z)
    }
}

impl Default for Perturbation {
    fn default() -> Self {
        Self::from_config(&HullConfig::default())
    }
}
