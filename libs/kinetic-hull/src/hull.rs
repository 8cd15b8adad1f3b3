//! # Convex Hull
//!
//! Entry point of the crate: validates input, perturbs it, runs the lower
//! and upper passes, and collects the deduplicated facet set.

use std::collections::BTreeSet;

use config::constants::{scaled_tolerance, HullConfig};
use glam::DVec3;
use log::debug;
use serde::Serialize;

use crate::chain::ChainView;
use crate::driver::{run_pass, Pass};
use crate::error::HullResult;
use crate::facet::{dedup_facets, extract_facets, Facet};
use crate::perturb::Perturbation;
use crate::point::{coordinate_scale, indexed, validate_input, HullPoint, SortedPoints};

/// Boundary of the convex hull of a point set, as oriented triangles over
/// the input ids.
///
/// Facets are counter-clockwise seen from outside, sorted, and free of
/// duplicates. Fewer than three points give an empty hull; three points give
/// the two opposite faces of their triangle.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::ConvexHull;
///
/// let hull = ConvexHull::from_positions(&[
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ])
/// .unwrap();
/// assert_eq!(hull.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvexHull {
    facets: Vec<Facet>,
    point_count: usize,
}

impl ConvexHull {
    /// Builds the hull of `points` with `config`.
    ///
    /// Ids must be a permutation of `0..points.len()` and every coordinate
    /// must be finite. A hand-assembled `config` is checked with
    /// [`HullConfig::validate`].
    pub fn build(points: &[HullPoint], config: &HullConfig) -> HullResult<Self> {
        config.validate()?;
        validate_input(points)?;

        let working = Perturbation::from_config(config).apply(points);
        let sorted = SortedPoints::new(points, &working);
        let band = scaled_tolerance(config.tolerance, coordinate_scale(&sorted.positions));
        let threshold = config.parallel_threshold.max(2);

        let mut facets = Vec::new();
        for pass in Pass::ALL {
            let (movie, mut links) = run_pass(pass, &sorted.positions, band, threshold);
            let before = facets.len();
            extract_facets(pass, &mut ChainView::new(&mut links), &movie, &sorted.ids, &mut facets)?;
            debug!(
                "{pass:?} pass over {} points: {} events, {} facets",
                sorted.len(),
                movie.len(),
                facets.len() - before
            );
        }
        dedup_facets(&mut facets);

        Ok(Self {
            facets,
            point_count: points.len(),
        })
    }

    /// Builds the hull of `positions` with the default configuration; ids
    /// are the indices.
    pub fn from_positions(positions: &[DVec3]) -> HullResult<Self> {
        Self::build(&indexed(positions), &HullConfig::default())
    }

    /// Sorted, oriented facets.
    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Number of facets.
    #[inline]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns true if the hull has no facet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Number of input points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Undirected edges as `(min, max)` id pairs, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let edges: BTreeSet<(usize, usize)> = self
            .facets
            .iter()
            .flat_map(|facet| facet.edges())
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        edges.into_iter().collect()
    }

    /// Ids appearing on at least one facet, sorted.
    pub fn vertex_ids(&self) -> Vec<usize> {
        let ids: BTreeSet<usize> = self.facets.iter().flat_map(|f| f.vertices()).collect();
        ids.into_iter().collect()
    }

    /// Number of hull edges at every id; interior ids have degree zero.
    pub fn vertex_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.point_count];
        for (a, b) in self.edges() {
            degrees[a] += 1;
            degrees[b] += 1;
        }
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HullError;
    use crate::validate;
    use config::constants::ConfigError;

    fn tetrahedron() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_tetrahedron_facets() {
        let hull = ConvexHull::from_positions(&tetrahedron()).unwrap();
        assert_eq!(
            hull.facets(),
            &[
                Facet::new(0, 1, 3),
                Facet::new(0, 2, 1),
                Facet::new(0, 3, 2),
                Facet::new(1, 2, 3),
            ]
        );
        assert_eq!(hull.point_count(), 4);
        assert_eq!(hull.edges().len(), 6);
        assert_eq!(hull.vertex_degrees(), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_too_few_points() {
        assert!(ConvexHull::from_positions(&[DVec3::ONE]).unwrap().is_empty());
        assert!(ConvexHull::from_positions(&[DVec3::ZERO, DVec3::X]).unwrap().is_empty());
    }

    #[test]
    fn test_triangle_has_two_faces() {
        let hull = ConvexHull::from_positions(&[DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
        assert_eq!(hull.facets(), &[Facet::new(0, 1, 2), Facet::new(0, 2, 1)]);
        assert_eq!(hull.vertex_ids(), vec![0, 1, 2]);
    }

    #[test]
    fn test_interior_point_excluded() {
        let mut points = tetrahedron();
        points.push(DVec3::splat(0.1));
        let hull = ConvexHull::from_positions(&points).unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.vertex_ids().contains(&4));
        assert_eq!(hull.vertex_degrees()[4], 0);
    }

    #[test]
    fn test_triple_coincident_point_stays_closed() {
        // (-1, -3, 2) occurs at ids 0, 5 and 9
        let points: Vec<DVec3> = [
            [-1.0, -3.0, 2.0],
            [1.0, 1.0, 2.0],
            [-3.0, 3.0, -3.0],
            [3.0, 3.0, -2.0],
            [2.0, 3.0, -2.0],
            [-1.0, -3.0, 2.0],
            [1.0, 3.0, 0.0],
            [-3.0, 1.0, -1.0],
            [3.0, 0.0, 2.0],
            [-1.0, -3.0, 2.0],
        ]
        .into_iter()
        .map(DVec3::from_array)
        .collect();

        for seed in 0..32 {
            let config = HullConfig::default().with_seed(seed);
            let hull = ConvexHull::build(&indexed(&points), &config).unwrap();
            assert_eq!(validate::check_closed(hull.facets()), Ok(()), "seed {seed}");
            assert_eq!(validate::check_euler(hull.facets()), Ok(()), "seed {seed}");
            assert_eq!(
                validate::check_convex(hull.facets(), &points, 1e-5),
                Ok(()),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = HullConfig {
            perturbation_jitter: 2.0,
            ..HullConfig::default()
        };
        assert_eq!(
            ConvexHull::build(&indexed(&tetrahedron()), &config),
            Err(HullError::Config(ConfigError::InvalidJitter(2.0)))
        );

        let config = HullConfig {
            tolerance: 1e-12,
            ..HullConfig::default()
        };
        assert!(matches!(
            ConvexHull::build(&indexed(&tetrahedron()), &config),
            Err(HullError::Config(ConfigError::ToleranceAboveJitter(..)))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(ConvexHull::from_positions(&[]), Err(HullError::EmptyInput));
    }
}
