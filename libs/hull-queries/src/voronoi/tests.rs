use super::*;
use std::f64::consts::PI;

fn config() -> HullConfig {
    HullConfig::default()
}

fn square_with_center() -> Vec<DVec2> {
    vec![
        DVec2::new(-1.0, -1.0),
        DVec2::new(1.0, -1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(-1.0, 1.0),
        DVec2::new(0.0, 0.0),
    ]
}

fn hexagon_with_center() -> Vec<DVec2> {
    let mut sites: Vec<DVec2> = (0..6)
        .map(|k| {
            let angle = k as f64 * PI / 3.0;
            DVec2::new(angle.cos(), angle.sin())
        })
        .collect();
    sites.push(DVec2::ZERO);
    sites
}

// =============================================================================
// PLANAR HULL
// =============================================================================

#[test]
fn test_planar_hull_of_square() {
    let mut hull = planar_hull(&square_with_center(), 1e-12);
    hull.sort_unstable();
    assert_eq!(hull, vec![0, 1, 2, 3]);
}

#[test]
fn test_planar_hull_drops_collinear_boundary_site() {
    let sites = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(1.0, 2.0),
    ];
    let mut hull = planar_hull(&sites, 1e-12);
    hull.sort_unstable();
    assert_eq!(hull, vec![0, 2, 3]);
}

#[test]
fn test_planar_hull_small_inputs() {
    assert!(planar_hull(&[], 1e-12).is_empty());
    assert_eq!(planar_hull(&[DVec2::ONE], 1e-12), vec![0]);
    assert_eq!(planar_hull(&[DVec2::ONE, DVec2::ZERO], 1e-12), vec![1, 0]);
}

// =============================================================================
// EDGE COUNTS
// =============================================================================

#[test]
fn test_center_site_sees_every_corner() {
    let counts = edge_counts(&square_with_center(), &config()).unwrap();
    assert_eq!(counts[4], 4);
}

#[test]
fn test_lift_preserves_site() {
    let site = DVec2::new(-3.0, 0.5);
    let lifted = lift(site);
    assert_eq!(lifted.truncate(), site);
    assert_eq!(lifted.z, 9.25);
}

// =============================================================================
// STATISTICS
// =============================================================================

#[test]
fn test_square_with_center_has_four_sides() {
    let stats = cell_statistics(&square_with_center(), &config()).unwrap();
    assert_eq!(
        stats,
        VoronoiStats {
            interior_sites: 1,
            interior_edges: 4
        }
    );
    assert_eq!(stats.mean_sides(), 4.0);
}

#[test]
fn test_hexagon_with_center_has_six_sides() {
    let stats = cell_statistics(&hexagon_with_center(), &config()).unwrap();
    assert_eq!(stats.interior_sites, 1);
    assert_eq!(stats.mean_sides(), 6.0);
}

#[test]
fn test_no_interior_sites() {
    let sites = [DVec2::ZERO, DVec2::X, DVec2::Y];
    assert_eq!(cell_statistics(&sites, &config()).unwrap().mean_sides(), 0.0);
    assert_eq!(cell_statistics(&[], &config()).unwrap(), VoronoiStats::default());
}

#[test]
fn test_non_finite_site_is_rejected() {
    let sites = [DVec2::ZERO, DVec2::new(f64::NAN, 1.0)];
    assert!(cell_statistics(&sites, &config()).is_err());
}
