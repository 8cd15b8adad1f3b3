//! # Hull Validation
//!
//! Checks a facet set against the properties every convex hull has: a
//! closed, consistently oriented surface, no point in front of any facet,
//! and Euler's count for a triangulated sphere.

use std::collections::{BTreeSet, HashMap};

use glam::DVec3;
use robust::{orient3d, Coord3D};

use crate::error::{HullError, HullResult};
use crate::facet::Facet;

#[inline]
fn coord(p: DVec3) -> Coord3D<f64> {
    Coord3D {
        x: p.x,
        y: p.y,
        z: p.z,
    }
}

/// Checks that every directed edge occurs exactly once and its reverse
/// occurs exactly once.
pub fn check_closed(facets: &[Facet]) -> HullResult<()> {
    let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
    for facet in facets {
        for edge in facet.edges() {
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    for (&(a, b), &count) in &counts {
        if count != 1 {
            return Err(HullError::invalid_topology(format!(
                "directed edge ({a}, {b}) appears {count} times"
            )));
        }
        if !counts.contains_key(&(b, a)) {
            return Err(HullError::invalid_topology(format!(
                "directed edge ({a}, {b}) has no reverse"
            )));
        }
    }
    Ok(())
}

/// Checks that no position lies more than `tolerance` in front of any
/// facet.
///
/// The side is decided with an exact `orient3d`; only points strictly in
/// front are measured against `tolerance`. `positions` is indexed by id.
pub fn check_convex(facets: &[Facet], positions: &[DVec3], tolerance: f64) -> HullResult<()> {
    for facet in facets {
        let [a, b, c] = facet.vertices().map(|id| positions[id]);
        let area = (b - a).cross(c - a).length();
        for (id, &p) in positions.iter().enumerate() {
            if facet.contains(id) {
                continue;
            }
            // Negative when p sees the counter-clockwise side.
            let volume = orient3d(coord(a), coord(b), coord(c), coord(p));
            if volume >= 0.0 {
                continue;
            }
            let distance = if area > 0.0 { -volume / area } else { f64::INFINITY };
            if distance > tolerance {
                return Err(HullError::NotConvex {
                    facet: *facet,
                    id,
                    distance,
                });
            }
        }
    }
    Ok(())
}

/// Checks `F = 2V - 4` over the ids referenced by `facets`. An empty facet
/// set passes.
pub fn check_euler(facets: &[Facet]) -> HullResult<()> {
    if facets.is_empty() {
        return Ok(());
    }
    let vertices: BTreeSet<usize> = facets.iter().flat_map(|f| f.vertices()).collect();
    let expected = 2 * vertices.len();
    if facets.len() + 4 != expected {
        return Err(HullError::invalid_topology(format!(
            "{} facets over {} vertices, expected {}",
            facets.len(),
            vertices.len(),
            expected.saturating_sub(4)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> (Vec<Facet>, Vec<DVec3>) {
        let facets = vec![
            Facet::new(0, 1, 3),
            Facet::new(0, 2, 1),
            Facet::new(0, 3, 2),
            Facet::new(1, 2, 3),
        ];
        let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        (facets, positions)
    }

    #[test]
    fn test_tetrahedron_passes() {
        let (facets, positions) = tetrahedron();
        assert_eq!(check_closed(&facets), Ok(()));
        assert_eq!(check_convex(&facets, &positions, 0.0), Ok(()));
        assert_eq!(check_euler(&facets), Ok(()));
    }

    #[test]
    fn test_open_surface_rejected() {
        let (facets, _) = tetrahedron();
        assert!(matches!(
            check_closed(&facets[1..]),
            Err(HullError::InvalidTopology { .. })
        ));
        assert!(check_euler(&facets[1..]).is_err());
    }

    #[test]
    fn test_inverted_facet_rejected() {
        let (mut facets, positions) = tetrahedron();
        for facet in facets.iter_mut() {
            *facet = facet.flipped();
        }
        assert_eq!(check_closed(&facets), Ok(()));
        match check_convex(&facets, &positions, 0.0) {
            Err(HullError::NotConvex { distance, .. }) => assert!(distance > 0.5),
            other => panic!("expected NotConvex, got {other:?}"),
        }
    }

    #[test]
    fn test_outside_point_reports_distance() {
        let (facets, mut positions) = tetrahedron();
        positions.push(DVec3::new(0.25, 0.25, -0.5));
        match check_convex(&facets, &positions, 1e-9) {
            Err(HullError::NotConvex { facet, id, distance }) => {
                assert_eq!(facet, Facet::new(0, 2, 1));
                assert_eq!(id, 4);
                assert!((distance - 0.5).abs() < 1e-12);
            }
            other => panic!("expected NotConvex, got {other:?}"),
        }
        assert_eq!(check_convex(&facets, &positions, 1.0), Ok(()));
    }

    #[test]
    fn test_empty_passes() {
        assert_eq!(check_closed(&[]), Ok(()));
        assert_eq!(check_euler(&[]), Ok(()));
    }
}
