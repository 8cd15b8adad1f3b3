//! # Nearest Facet Distance
//!
//! Minimum unsigned distance from a query point to the planes of all hull
//! facets. For a point inside the hull this is its distance to the surface.
//!
//! Planes are built from the caller's original coordinates, never from the
//! perturbed working copy the hull was computed on.

use config::constants::HullConfig;
use glam::DVec3;
use kinetic_hull::point::indexed;
use kinetic_hull::{ConvexHull, Facet};
use log::debug;

use crate::error::{QueryError, QueryResult};

// =============================================================================
// PLANE
// =============================================================================

/// Plane `normal · p + offset = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unnormalized normal, `(b - a) × (c - a)` of the defining triangle.
    pub normal: DVec3,
    /// Constant term.
    pub offset: f64,
}

impl Plane {
    /// Plane through three points, normal following their winding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use hull_queries::distance::Plane;
    ///
    /// let plane = Plane::through(DVec3::ZERO, DVec3::X, DVec3::Y);
    /// assert_eq!(plane.normal, DVec3::Z);
    /// assert_eq!(plane.distance(DVec3::new(3.0, 4.0, -2.0)), 2.0);
    /// ```
    pub fn through(a: DVec3, b: DVec3, c: DVec3) -> Self {
        let normal = (b - a).cross(c - a);
        Self {
            normal,
            offset: -normal.dot(a),
        }
    }

    /// Returns true if the defining points were collinear.
    pub fn is_degenerate(&self) -> bool {
        self.normal == DVec3::ZERO
    }

    /// Unsigned distance from `point`. A degenerate plane is infinitely far.
    pub fn distance(&self, point: DVec3) -> f64 {
        let length = self.normal.length();
        if length == 0.0 {
            return f64::INFINITY;
        }
        (self.normal.dot(point) + self.offset).abs() / length
    }
}

// =============================================================================
// NEAREST FACET
// =============================================================================

/// Facet planes of one hull, ready for repeated queries.
#[derive(Debug, Clone)]
pub struct NearestFacet {
    planes: Vec<(Facet, Plane)>,
}

impl NearestFacet {
    /// Precomputes the plane of every facet of `hull`.
    ///
    /// `positions` are the original coordinates indexed by id.
    pub fn new(hull: &ConvexHull, positions: &[DVec3]) -> QueryResult<Self> {
        if positions.len() != hull.point_count() {
            return Err(QueryError::PointCountMismatch {
                expected: hull.point_count(),
                actual: positions.len(),
            });
        }
        let planes = hull
            .facets()
            .iter()
            .map(|&facet| {
                let [a, b, c] = facet.vertices().map(|id| positions[id]);
                (facet, Plane::through(a, b, c))
            })
            .collect();
        Ok(Self { planes })
    }

    /// Builds the hull of `positions` and precomputes its planes.
    pub fn build(positions: &[DVec3], config: &HullConfig) -> QueryResult<Self> {
        let hull = ConvexHull::build(&indexed(positions), config)?;
        debug!("nearest facet index over {} facets", hull.len());
        Self::new(&hull, positions)
    }

    /// Number of facet planes.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Returns true if there is no facet to measure against.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Minimum distance from `query` to any facet plane, `None` for an empty
    /// hull.
    pub fn distance(&self, query: DVec3) -> QueryResult<Option<f64>> {
        Ok(self.nearest(query)?.map(|(_, distance)| distance))
    }

    /// Facet whose plane is closest to `query`, with the distance. The first
    /// facet in sorted order wins ties.
    pub fn nearest(&self, query: DVec3) -> QueryResult<Option<(Facet, f64)>> {
        if !query.is_finite() {
            return Err(QueryError::NonFiniteQuery);
        }
        let mut best: Option<(Facet, f64)> = None;
        for (facet, plane) in &self.planes {
            let distance = plane.distance(query);
            if best.map_or(true, |(_, nearest)| distance < nearest) {
                best = Some((*facet, distance));
            }
        }
        Ok(best)
    }
}
