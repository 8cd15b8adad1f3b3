//! # Input Points
//!
//! Caller-facing point type, input validation, and the x-sorted slot array
//! every pass works on.

use glam::DVec3;

use crate::error::{HullError, HullResult};

/// A caller point with its stable id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullPoint {
    /// Id in `0..N`, unique within one build.
    pub id: usize,
    /// Coordinates as supplied by the caller.
    pub position: DVec3,
}

impl HullPoint {
    /// Creates a point.
    pub fn new(id: usize, position: DVec3) -> Self {
        Self { id, position }
    }
}

/// Wraps positions as points whose ids are their indices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::point::indexed;
///
/// let points = indexed(&[DVec3::ZERO, DVec3::X]);
/// assert_eq!(points[1].id, 1);
/// ```
pub fn indexed(positions: &[DVec3]) -> Vec<HullPoint> {
    positions
        .iter()
        .enumerate()
        .map(|(id, &position)| HullPoint::new(id, position))
        .collect()
}

/// Checks that ids form a permutation of `0..N` and every coordinate is
/// finite.
pub fn validate_input(points: &[HullPoint]) -> HullResult<()> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    let count = points.len();
    let mut seen = vec![false; count];
    for point in points {
        if point.id >= count {
            return Err(HullError::IdOutOfRange {
                id: point.id,
                count,
            });
        }
        if std::mem::replace(&mut seen[point.id], true) {
            return Err(HullError::DuplicateId { id: point.id });
        }
        if !point.position.is_finite() {
            return Err(HullError::NonFiniteCoordinate { id: point.id });
        }
    }
    Ok(())
}

/// Largest absolute coordinate, `1.0` when every coordinate is zero.
pub fn coordinate_scale<'a>(positions: impl IntoIterator<Item = &'a DVec3>) -> f64 {
    let scale = positions
        .into_iter()
        .map(|p| p.abs().max_element())
        .fold(0.0, f64::max);
    if scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Working positions sorted by `(x, y, z)`, ties broken by id.
///
/// A slot is an index into this array; `ids[slot]` maps it back to the
/// caller's id.
#[derive(Debug, Clone)]
pub struct SortedPoints {
    /// Working positions in slot order.
    pub positions: Vec<DVec3>,
    /// Caller id of each slot.
    pub ids: Vec<usize>,
}

impl SortedPoints {
    /// Sorts working positions given per input point.
    ///
    /// `working[i]` belongs to `points[i]`.
    pub fn new(points: &[HullPoint], working: &[DVec3]) -> Self {
        let mut order: Vec<(DVec3, usize)> = working
            .iter()
            .zip(points)
            .map(|(&position, point)| (position, point.id))
            .collect();
        order.sort_unstable_by(|(a, a_id), (b, b_id)| {
            a.x.total_cmp(&b.x)
                .then(a.y.total_cmp(&b.y))
                .then(a.z.total_cmp(&b.z))
                .then(a_id.cmp(b_id))
        });
        let (positions, ids) = order.into_iter().unzip();
        Self { positions, ids }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_permutation() {
        let points = vec![
            HullPoint::new(1, DVec3::X),
            HullPoint::new(0, DVec3::Y),
            HullPoint::new(2, DVec3::Z),
        ];
        assert_eq!(validate_input(&points), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(validate_input(&[]), Err(HullError::EmptyInput));
        assert_eq!(
            validate_input(&[HullPoint::new(3, DVec3::ZERO)]),
            Err(HullError::IdOutOfRange { id: 3, count: 1 })
        );
        assert_eq!(
            validate_input(&[HullPoint::new(0, DVec3::ZERO), HullPoint::new(0, DVec3::X)]),
            Err(HullError::DuplicateId { id: 0 })
        );
        assert_eq!(
            validate_input(&[HullPoint::new(0, DVec3::new(f64::NAN, 0.0, 0.0))]),
            Err(HullError::NonFiniteCoordinate { id: 0 })
        );
    }

    #[test]
    fn test_scale() {
        assert_eq!(coordinate_scale(&[DVec3::ZERO]), 1.0);
        assert_eq!(coordinate_scale(&[DVec3::new(0.5, -3.0, 2.0)]), 3.0);
    }

    #[test]
    fn test_sorted_points_lexicographic() {
        let working = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
            DVec3::new(0.0, 1.0, 5.0),
            DVec3::new(0.0, 1.0, 5.0),
        ];
        let points = vec![
            HullPoint::new(0, DVec3::ZERO),
            HullPoint::new(1, DVec3::ZERO),
            HullPoint::new(3, DVec3::ZERO),
            HullPoint::new(2, DVec3::ZERO),
        ];
        let sorted = SortedPoints::new(&points, &working);
        assert_eq!(sorted.ids, vec![2, 3, 1, 0]);
        assert_eq!(sorted.positions[2], DVec3::new(0.0, 2.0, 0.0));
    }
}
