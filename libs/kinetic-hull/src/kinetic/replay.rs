//! Backward replay that rebuilds the merged chain.

use super::{Frame, Movie};
use crate::chain::ChainView;

/// Connects the final bridge `(u, v)` and undoes `movie` from last to first.
///
/// A slot outside the open x interval of the current bridge belongs to one
/// side and is simply toggled; if it was a bridge end the bridge retracts
/// one step. A slot inside the interval is spliced between `u` and `v` and
/// becomes the new `u` or `v` depending on which side of `split_x` it lies.
///
/// Afterwards the chain spanning the view is the merged lower hull at time
/// `-inf`, and every slot of `movie` has the neighbours it is toggled
/// against when the movie is played forward again.
pub fn replay(
    frame: &Frame<'_>,
    view: &mut ChainView<'_>,
    movie: &Movie,
    bridge: (usize, usize),
    split_x: f64,
) {
    let (mut u, mut v) = bridge;
    view.connect(u, v);

    for &slot in movie.frames().iter().rev() {
        let x = frame.x(slot);
        if x <= frame.x(u) || x >= frame.x(v) {
            view.toggle(slot);
            if slot == u {
                if let Some(prev) = view.prev(u) {
                    u = prev;
                }
            } else if slot == v {
                if let Some(next) = view.next(v) {
                    v = next;
                }
            }
        } else {
            view.splice(u, slot, v);
            if x <= split_x {
                u = slot;
            } else {
                v = slot;
            }
        }
    }
}
