//! # Recursive Driver
//!
//! Builds the lower hull of an x-sorted slot range by halving it, building
//! both halves, and merging them kinetically. Each call returns its merge
//! movie, which is exactly what the parent merge consumes.
//!
//! The upper hull is not a second algorithm: [`Pass::Upper`] mirrors z, so
//! the upper hull of the input is the lower hull of the mirrored points.

use glam::DVec3;
use log::trace;

use crate::chain::{ChainView, EventKind, Link};
use crate::kinetic::{find_bridge, merge, replay, Frame, Movie};

// =============================================================================
// PASSES
// =============================================================================

/// Which half of the hull a pass builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Faces visible from below.
    Lower,
    /// Faces visible from above, built as the lower hull of `z -> -z`.
    Upper,
}

impl Pass {
    /// Both passes, in build order.
    pub const ALL: [Pass; 2] = [Pass::Lower, Pass::Upper];

    /// Maps a working position into the frame this pass builds in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use kinetic_hull::driver::Pass;
    ///
    /// let p = DVec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Pass::Upper.apply(p), DVec3::new(1.0, 2.0, -3.0));
    /// assert_eq!(Pass::Upper.invert(Pass::Upper.apply(p)), p);
    /// ```
    #[inline]
    pub fn apply(self, position: DVec3) -> DVec3 {
        match self {
            Pass::Lower => position,
            Pass::Upper => DVec3::new(position.x, position.y, -position.z),
        }
    }

    /// Inverse of [`Pass::apply`]. The z mirror is an involution.
    #[inline]
    pub fn invert(self, position: DVec3) -> DVec3 {
        self.apply(position)
    }

    /// Toggle result after which a recorded triangle must be flipped to face
    /// outward.
    #[inline]
    pub fn flipping_kind(self) -> EventKind {
        match self {
            Pass::Lower => EventKind::Delete,
            Pass::Upper => EventKind::Insert,
        }
    }
}

// =============================================================================
// LOWER HULL
// =============================================================================

/// Builds the lower hull of every slot covered by `view`.
///
/// Positions in `frame` must be sorted by `(x, y, z)`. Ranges of at least
/// `parallel_threshold` slots build their halves with `rayon::join`; the
/// halves are disjoint views, and the merge itself always runs on the
/// calling thread.
pub fn build_lower_hull(frame: &Frame<'_>, mut view: ChainView<'_>, parallel_threshold: usize) -> Movie {
    let (left, right) = (view.start(), view.end());
    if right - left <= 1 {
        if left < right {
            view.isolate(left);
        }
        return Movie::new();
    }

    let middle = left + (right - left) / 2;
    let (left_movie, right_movie) = {
        let (lower, upper) = view.split_at(middle);
        if right - left >= parallel_threshold {
            rayon::join(
                || build_lower_hull(frame, lower, parallel_threshold),
                || build_lower_hull(frame, upper, parallel_threshold),
            )
        } else {
            (
                build_lower_hull(frame, lower, parallel_threshold),
                build_lower_hull(frame, upper, parallel_threshold),
            )
        }
    };

    let bridge = find_bridge(frame, &view, middle - 1, middle);
    let (movie, state) = merge(frame, &mut view, &left_movie, &right_movie, bridge);
    replay(frame, &mut view, &movie, (state.u, state.v), frame.x(middle - 1));

    trace!(
        "merged slots {left}..{right}: bridge ({}, {}), {} events",
        bridge.0,
        bridge.1,
        movie.len()
    );
    movie
}

/// Runs one pass over x-sorted working positions.
///
/// Returns the top-level movie together with the links in their `-inf`
/// state, ready for facet extraction.
pub fn run_pass(
    pass: Pass,
    sorted: &[DVec3],
    band: f64,
    parallel_threshold: usize,
) -> (Movie, Vec<Link>) {
    let positions: Vec<DVec3> = sorted.iter().map(|&p| pass.apply(p)).collect();
    let frame = Frame::new(&positions, band);
    let mut links = vec![Link::default(); positions.len()];
    let movie = build_lower_hull(&frame, ChainView::new(&mut links), parallel_threshold);
    (movie, links)
}
