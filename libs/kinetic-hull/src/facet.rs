//! # Facets
//!
//! Oriented triangles over input ids and their extraction from a movie.

use std::fmt;

use serde::Serialize;

use crate::chain::ChainView;
use crate::driver::Pass;
use crate::error::{HullError, HullResult};
use crate::kinetic::Movie;

/// Oriented triangle of input ids, stored in canonical rotation: the
/// smallest id first, cyclic order preserved.
///
/// Two facets describing the same oriented triangle compare equal; the
/// reversed triangle does not.
///
/// # Example
///
/// ```rust
/// use kinetic_hull::Facet;
///
/// assert_eq!(Facet::new(5, 2, 9), Facet::new(2, 9, 5));
/// assert_ne!(Facet::new(5, 2, 9), Facet::new(2, 5, 9));
/// assert_eq!(Facet::new(5, 2, 9).vertices(), [2, 9, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Facet {
    vertices: [usize; 3],
}

impl Facet {
    /// Creates a facet from three ids in counter-clockwise order seen from
    /// outside.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut vertices = [a, b, c];
        let smallest = (0..3).min_by_key(|&i| vertices[i]).unwrap_or(0);
        vertices.rotate_left(smallest);
        Self { vertices }
    }

    /// Ids in canonical rotation.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    /// The same triangle with the opposite orientation.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(b, a, c)
    }

    /// Directed edges in cyclic order.
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    /// Returns true if `id` is a corner of this facet.
    pub fn contains(&self, id: usize) -> bool {
        self.vertices.contains(&id)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(f, "{a} {b} {c}")
    }
}

/// Replays a top-level movie forward and emits one facet per event.
///
/// Each event contributes the triangle `(prev, slot, next)` as it stands
/// just before the slot is toggled. When the toggle matches the pass's
/// [`Pass::flipping_kind`] the triangle is flipped, so every facet of both
/// passes is counter-clockwise seen from outside. Slots are mapped to input
/// ids through `ids`.
pub fn extract_facets(
    pass: Pass,
    view: &mut ChainView<'_>,
    movie: &Movie,
    ids: &[usize],
    out: &mut Vec<Facet>,
) -> HullResult<()> {
    out.reserve(movie.len());
    for &slot in movie.frames() {
        let (Some(prev), Some(next)) = (view.prev(slot), view.next(slot)) else {
            return Err(HullError::invalid_topology(format!(
                "{pass:?} event at id {} has a missing neighbour",
                ids[slot]
            )));
        };
        let facet = Facet::new(ids[prev], ids[slot], ids[next]);
        if view.toggle(slot) == pass.flipping_kind() {
            out.push(facet.flipped());
        } else {
            out.push(facet);
        }
    }
    Ok(())
}

/// Sorts facets and removes exact duplicates.
pub fn dedup_facets(facets: &mut Vec<Facet>) {
    facets.sort_unstable();
    facets.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Link;

    #[test]
    fn test_canonical_rotation_keeps_cycle() {
        for facet in [Facet::new(3, 1, 2), Facet::new(1, 2, 3), Facet::new(2, 3, 1)] {
            assert_eq!(facet.vertices(), [1, 2, 3]);
        }
        assert_eq!(Facet::new(3, 2, 1).vertices(), [1, 3, 2]);
    }

    #[test]
    fn test_flip_is_involution() {
        let facet = Facet::new(4, 7, 1);
        assert_ne!(facet.flipped(), facet);
        assert_eq!(facet.flipped().flipped(), facet);
    }

    #[test]
    fn test_edges_follow_orientation() {
        let facet = Facet::new(2, 0, 1);
        assert_eq!(facet.edges(), [(0, 1), (1, 2), (2, 0)]);
        assert!(facet.contains(2));
        assert!(!facet.contains(3));
    }

    #[test]
    fn test_dedup_collapses_rotations() {
        let mut facets = vec![Facet::new(1, 2, 3), Facet::new(2, 3, 1), Facet::new(1, 3, 2)];
        dedup_facets(&mut facets);
        assert_eq!(facets, vec![Facet::new(1, 2, 3), Facet::new(1, 3, 2)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Facet::new(9, 4, 6).to_string(), "4 6 9");
    }

    #[test]
    fn test_extract_flips_on_pass_kind() {
        // Chain 0 - 1 - 2 with slot 1 linked: the lower pass deletes it and
        // therefore flips the recorded triangle.
        let mut links = vec![Link::default(); 3];
        let mut view = ChainView::new(&mut links);
        for slot in 0..3 {
            view.isolate(slot);
        }
        view.connect(0, 1);
        view.connect(1, 2);

        let ids = [10, 11, 12];
        let movie = Movie::from(vec![1, 1]);
        let mut out = Vec::new();
        extract_facets(Pass::Lower, &mut view, &movie, &ids, &mut out).unwrap();
        assert_eq!(out, vec![Facet::new(11, 10, 12), Facet::new(10, 11, 12)]);
    }

    #[test]
    fn test_extract_rejects_chain_end() {
        let mut links = vec![Link::default(); 2];
        let mut view = ChainView::new(&mut links);
        view.isolate(0);
        view.isolate(1);
        view.connect(0, 1);

        let mut out = Vec::new();
        let result = extract_facets(Pass::Upper, &mut view, &Movie::from(vec![1]), &[0, 1], &mut out);
        assert!(matches!(result, Err(HullError::InvalidTopology { .. })));
    }
}
