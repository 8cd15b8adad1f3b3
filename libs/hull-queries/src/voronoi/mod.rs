//! # Voronoi Side Statistics
//!
//! Counts the sides of bounded Voronoi cells of planar sites without
//! building the diagram.
//!
//! ## Algorithm Steps
//!
//! 1. Lift every site onto the paraboloid `z = x² + y²`
//! 2. Build the 3D hull of the lifted points; its edges project to Delaunay
//!    edges, and each Delaunay edge of a site is one side of its Voronoi cell
//! 3. Drop sites on the planar hull, whose cells are unbounded
//! 4. Average the edge counts of the remaining sites

use config::constants::{scaled_tolerance, HullConfig};
use glam::{DVec2, DVec3};
use kinetic_hull::point::indexed;
use kinetic_hull::predicates::{orientation_xy, Turn};
use kinetic_hull::ConvexHull;
use log::debug;
use serde::Serialize;

use crate::error::QueryResult;

/// Lifts a site onto the paraboloid.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use hull_queries::voronoi::lift;
///
/// assert_eq!(lift(DVec2::new(1.0, 2.0)), DVec3::new(1.0, 2.0, 5.0));
/// ```
#[inline]
pub fn lift(site: DVec2) -> DVec3 {
    site.extend(site.length_squared())
}

/// Ids of the sites on the planar convex hull, in boundary order.
///
/// Monotone chain over sites sorted by `(x, y)`. A site is kept only where
/// the boundary turns strictly clockwise, so sites on a straight boundary
/// stretch are not part of the result. `tolerance` is relative to the
/// largest site coordinate.
pub fn planar_hull(sites: &[DVec2], tolerance: f64) -> Vec<usize> {
    let scale = sites
        .iter()
        .map(|s| s.abs().max_element())
        .fold(0.0, f64::max);
    let band = scaled_tolerance(tolerance, scale);

    let mut order: Vec<usize> = (0..sites.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        sites[a]
            .x
            .total_cmp(&sites[b].x)
            .then(sites[a].y.total_cmp(&sites[b].y))
            .then(a.cmp(&b))
    });

    let clockwise = |a: usize, b: usize, c: usize| {
        orientation_xy(
            sites[a].extend(0.0),
            sites[b].extend(0.0),
            sites[c].extend(0.0),
            band,
        ) == Turn::Right
    };

    let mut hull: Vec<usize> = Vec::with_capacity(sites.len() + 1);
    for &site in &order {
        while let &[.., a, b] = hull.as_slice() {
            if clockwise(a, b, site) {
                break;
            }
            hull.pop();
        }
        hull.push(site);
    }
    let bottom = hull.len();
    for &site in order.iter().rev().skip(1) {
        while hull.len() > bottom {
            let &[.., a, b] = hull.as_slice() else {
                break;
            };
            if clockwise(a, b, site) {
                break;
            }
            hull.pop();
        }
        hull.push(site);
    }
    if hull.len() > 1 {
        // The walk closes on its starting site
        hull.pop();
    }
    hull
}

/// Number of distinct hull edges at every lifted site, indexed by site.
pub fn edge_counts(sites: &[DVec2], config: &HullConfig) -> QueryResult<Vec<usize>> {
    let lifted: Vec<DVec3> = sites.iter().map(|&s| lift(s)).collect();
    let hull = ConvexHull::build(&indexed(&lifted), config)?;
    debug!(
        "lifted hull of {} sites: {} facets, {} edges",
        sites.len(),
        hull.len(),
        hull.edges().len()
    );
    Ok(hull.vertex_degrees())
}

/// Side totals over the bounded Voronoi cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoronoiStats {
    /// Sites not on the planar hull.
    pub interior_sites: usize,
    /// Sum of their edge counts.
    pub interior_edges: usize,
}

impl VoronoiStats {
    /// Mean number of sides of a bounded cell, `0.0` without interior sites.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hull_queries::voronoi::VoronoiStats;
    ///
    /// let stats = VoronoiStats { interior_sites: 2, interior_edges: 11 };
    /// assert_eq!(stats.mean_sides(), 5.5);
    /// assert_eq!(VoronoiStats::default().mean_sides(), 0.0);
    /// ```
    pub fn mean_sides(&self) -> f64 {
        if self.interior_sites == 0 {
            return 0.0;
        }
        self.interior_edges as f64 / self.interior_sites as f64
    }
}

/// Edge totals over the sites whose Voronoi cells are bounded.
///
/// No sites give empty statistics.
pub fn cell_statistics(sites: &[DVec2], config: &HullConfig) -> QueryResult<VoronoiStats> {
    if sites.is_empty() {
        return Ok(VoronoiStats::default());
    }
    let counts = edge_counts(sites, config)?;

    let mut on_boundary = vec![false; sites.len()];
    for id in planar_hull(sites, config.tolerance) {
        on_boundary[id] = true;
    }

    let stats = counts
        .iter()
        .zip(&on_boundary)
        .filter(|(_, &boundary)| !boundary)
        .fold(VoronoiStats::default(), |stats, (&count, _)| VoronoiStats {
            interior_sites: stats.interior_sites + 1,
            interior_edges: stats.interior_edges + count,
        });
    debug!(
        "{} interior sites with {} edges",
        stats.interior_sites, stats.interior_edges
    );
    Ok(stats)
}

#[cfg(test)]
mod tests;
