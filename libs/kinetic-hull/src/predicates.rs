//! # Geometric Predicates
//!
//! XY orientation and the kinetic clock.
//!
//! Both predicates look at a triple `(a, b, c)` through the vectors
//! `b - a` and `c - b`. The orientation is the sign of their cross product
//! in the XY projection. The kinetic time is the ratio of the XZ cross
//! product to the XY cross product: the rotation of the viewing direction
//! at which the triple turns collinear in the projection, which is exactly
//! when the lower hull contour changes combinatorially.
//!
//! The XY cross product is evaluated with an adaptive exact predicate, and
//! both functions treat a value inside the same absolute band as zero, so a
//! triple the bridge walk calls collinear never schedules an event.

use glam::DVec3;
use robust::{orient2d, Coord};

/// Sign of an XY turn, ordered so that [`Turn::Unbounded`] sorts after every
/// real sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    /// Clockwise turn.
    Right,
    /// Cross product inside the tolerance band.
    Collinear,
    /// Counter-clockwise turn.
    Left,
    /// At least one operand does not exist.
    Unbounded,
}

#[inline]
fn coord_xy(p: DVec3) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Cross product of `b - a` and `c - b` projected onto XY. The sign is
/// exact.
#[inline]
pub fn cross_xy(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    orient2d(coord_xy(a), coord_xy(b), coord_xy(c))
}

/// Cross product of `b - a` and `c - b` projected onto XZ.
#[inline]
pub fn cross_xz(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    (b.x - a.x) * (c.z - b.z) - (b.z - a.z) * (c.x - b.x)
}

/// Classifies the XY turn of `(a, b, c)` against an absolute tolerance band.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::predicates::{orientation_xy, Turn};
///
/// let a = DVec3::new(0.0, 0.0, 0.0);
/// let b = DVec3::new(1.0, 0.0, 0.0);
/// assert_eq!(orientation_xy(a, b, DVec3::new(2.0, 1.0, 0.0), 1e-12), Turn::Left);
/// assert_eq!(orientation_xy(a, b, DVec3::new(2.0, -1.0, 0.0), 1e-12), Turn::Right);
/// assert_eq!(orientation_xy(a, b, DVec3::new(2.0, 0.0, 5.0), 1e-12), Turn::Collinear);
/// ```
#[inline]
pub fn orientation_xy(a: DVec3, b: DVec3, c: DVec3, band: f64) -> Turn {
    let turn = cross_xy(a, b, c);
    if turn > band {
        Turn::Left
    } else if turn < -band {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Time at which `(a, b, c)` becomes collinear in the rotating projection.
///
/// An XY cross product within `band` of zero yields `f64::INFINITY`, which
/// never fires.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::predicates::kinetic_time;
///
/// let t = kinetic_time(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 1.0),
///     DVec3::new(2.0, 0.0, 0.0),
///     0.0,
/// );
/// assert_eq!(t, 1.0);
/// ```
#[inline]
pub fn kinetic_time(a: DVec3, b: DVec3, c: DVec3, band: f64) -> f64 {
    let denominator = cross_xy(a, b, c);
    if denominator.abs() <= band {
        return f64::INFINITY;
    }
    cross_xz(a, b, c) / denominator
}
