//! Bridge search between two adjacent lower hulls.

use super::Frame;
use crate::chain::ChainView;
use crate::predicates::Turn;

/// Finds the common supporting edge of two lower hull chains at time `-inf`.
///
/// `u` starts at the rightmost slot of the left chain and `v` at the
/// leftmost slot of the right chain. `v` advances while `(u, v, v.next)`
/// turns right, otherwise `u` retreats while `(u.prev, u, v)` turns right.
/// Every step discards a candidate for good, so the walk is linear in the
/// chain lengths.
pub fn find_bridge(frame: &Frame<'_>, view: &ChainView<'_>, u: usize, v: usize) -> (usize, usize) {
    let (mut u, mut v) = (u, v);
    loop {
        let turns_right = |a, b, c| frame.turn(Some(a), Some(b), Some(c)) == Turn::Right;
        if let Some(next) = view.next(v).filter(|&next| turns_right(u, v, next)) {
            v = next;
        } else if let Some(prev) = view.prev(u).filter(|&prev| turns_right(prev, u, v)) {
            u = prev;
        } else {
            return (u, v);
        }
    }
}
