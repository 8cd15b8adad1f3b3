//! Forward sweep of the kinetic merge.

use super::{Frame, Movie};
use crate::chain::ChainView;

/// Candidate structural changes, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KineticEvent {
    /// The next event of the left movie becomes due.
    LeftMovie,
    /// The next event of the right movie becomes due.
    RightMovie,
    /// `(u.prev, u, v)` turns collinear: `u` leaves the bridge.
    LeftRetreat,
    /// `(u, u.next, v)` turns collinear: `u.next` joins as the new `u`.
    LeftAdvance,
    /// `(u, v.prev, v)` turns collinear: `v.prev` joins as the new `v`.
    RightRetreat,
    /// `(u, v, v.next)` turns collinear: `v` leaves the bridge.
    RightAdvance,
}

impl KineticEvent {
    /// All events, first one wins on equal times.
    pub const ORDER: [KineticEvent; 6] = [
        KineticEvent::LeftMovie,
        KineticEvent::RightMovie,
        KineticEvent::LeftRetreat,
        KineticEvent::LeftAdvance,
        KineticEvent::RightRetreat,
        KineticEvent::RightAdvance,
    ];
}

/// State threaded through the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeState {
    /// Left end of the bridge.
    pub u: usize,
    /// Right end of the bridge.
    pub v: usize,
    /// Next unread position in the left movie.
    pub left_cursor: usize,
    /// Next unread position in the right movie.
    pub right_cursor: usize,
    /// Time of the last applied event.
    pub clock: f64,
}

impl MergeState {
    /// Starts a sweep at time `-inf` on the bridge `(u, v)`.
    pub fn new(u: usize, v: usize) -> Self {
        Self {
            u,
            v,
            left_cursor: 0,
            right_cursor: 0,
            clock: f64::NEG_INFINITY,
        }
    }

    /// Times of the six candidate events, in [`KineticEvent::ORDER`].
    pub(super) fn candidate_times(
        &self,
        frame: &Frame<'_>,
        view: &ChainView<'_>,
        left: &Movie,
        right: &Movie,
    ) -> [f64; 6] {
        let movie_time = |slot: Option<usize>| match slot {
            Some(slot) => frame.time(view.prev(slot), Some(slot), view.next(slot)),
            None => f64::INFINITY,
        };
        let (u, v) = (Some(self.u), Some(self.v));
        [
            movie_time(left.get(self.left_cursor)),
            movie_time(right.get(self.right_cursor)),
            frame.time(view.prev(self.u), u, v),
            frame.time(u, view.next(self.u), v),
            frame.time(u, view.prev(self.v), v),
            frame.time(u, v, view.next(self.v)),
        ]
    }

    /// Earliest event strictly after the clock. Ties keep the first event.
    pub(super) fn next_event(&self, times: &[f64; 6]) -> Option<(KineticEvent, f64)> {
        let mut best: Option<(KineticEvent, f64)> = None;
        for (&event, &time) in KineticEvent::ORDER.iter().zip(times) {
            let earliest = best.map_or(f64::INFINITY, |(_, t)| t);
            if time > self.clock && time < earliest {
                best = Some((event, time));
            }
        }
        best
    }

    /// Applies `event`, recording into `out` the slots that change state in
    /// the merged hull. Only movie events toggle membership here; bridge
    /// events are materialized by the replay.
    fn apply(
        &mut self,
        event: KineticEvent,
        frame: &Frame<'_>,
        view: &mut ChainView<'_>,
        left: &Movie,
        right: &Movie,
        out: &mut Movie,
    ) {
        match event {
            KineticEvent::LeftMovie => {
                if let Some(slot) = left.get(self.left_cursor) {
                    if frame.x(slot) < frame.x(self.u) {
                        out.push(slot);
                    }
                    view.toggle(slot);
                }
                self.left_cursor += 1;
            }
            KineticEvent::RightMovie => {
                if let Some(slot) = right.get(self.right_cursor) {
                    if frame.x(slot) > frame.x(self.v) {
                        out.push(slot);
                    }
                    view.toggle(slot);
                }
                self.right_cursor += 1;
            }
            KineticEvent::LeftRetreat => {
                if let Some(prev) = view.prev(self.u) {
                    out.push(self.u);
                    self.u = prev;
                }
            }
            KineticEvent::LeftAdvance => {
                if let Some(next) = view.next(self.u) {
                    self.u = next;
                    out.push(next);
                }
            }
            KineticEvent::RightRetreat => {
                if let Some(prev) = view.prev(self.v) {
                    self.v = prev;
                    out.push(prev);
                }
            }
            KineticEvent::RightAdvance => {
                if let Some(next) = view.next(self.v) {
                    out.push(self.v);
                    self.v = next;
                }
            }
        }
    }
}

/// Sweeps the clock from `-inf` across both movies and the bridge.
///
/// Returns the merged movie in chronological order and the final state; its
/// `(u, v)` is the bridge at time `+inf`. On return the two half chains sit
/// in their `+inf` state.
pub fn merge(
    frame: &Frame<'_>,
    view: &mut ChainView<'_>,
    left: &Movie,
    right: &Movie,
    bridge: (usize, usize),
) -> (Movie, MergeState) {
    let mut state = MergeState::new(bridge.0, bridge.1);
    let mut out = Movie::new();

    loop {
        let times = state.candidate_times(frame, view, left, right);
        let Some((event, time)) = state.next_event(&times) else {
            break;
        };
        state.apply(event, frame, view, left, right, &mut out);
        state.clock = time;
    }

    (out, state)
}
