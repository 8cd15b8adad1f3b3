//! # Kinetic Merge
//!
//! Merging of two lower hulls that are each described by a chain and a
//! movie.
//!
//! ## Algorithm Steps
//!
//! 1. Walk the bridge between the two chains at time `-inf`
//! 2. Sweep the clock forward, applying the earliest of six candidate events
//!    and recording every slot whose membership in the merged hull changes
//! 3. Connect the final bridge and replay the recorded movie backwards, which
//!    leaves the merged chain in its `-inf` state
//!
//! The movie of step 2 is what the next level up consumes.

mod bridge;
mod merge;
mod replay;


pub use bridge::find_bridge;
pub use merge::{merge, KineticEvent, MergeState};
pub use replay::replay;

use glam::DVec3;

use crate::predicates::{kinetic_time, orientation_xy, Turn};

// =============================================================================
// MOVIE
// =============================================================================

/// Chronological log of the slots whose membership changed during a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    frames: Vec<usize>,
}

impl Movie {
    /// Creates an empty movie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    #[inline]
    pub fn push(&mut self, slot: usize) {
        self.frames.push(slot);
    }

    /// Number of recorded events.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Recorded slots in chronological order.
    #[inline]
    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    /// Slot recorded at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.frames.get(index).copied()
    }
}

impl From<Vec<usize>> for Movie {
    fn from(frames: Vec<usize>) -> Self {
        Self { frames }
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// Read-only geometry shared by every merge of one pass: slot positions and
/// the absolute orientation band.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'p> {
    positions: &'p [DVec3],
    band: f64,
}

impl<'p> Frame<'p> {
    /// Creates a frame over x-sorted positions.
    pub fn new(positions: &'p [DVec3], band: f64) -> Self {
        Self { positions, band }
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

    /// Position of `slot`.
    #[inline]
    pub fn position(&self, slot: usize) -> DVec3 {
        self.positions[slot]
    }

    /// X coordinate of `slot`.
    #[inline]
    pub fn x(&self, slot: usize) -> f64 {
        self.positions[slot].x
    }

    /// XY turn of three optional slots; a missing slot is unbounded.
    pub fn turn(&self, a: Option<usize>, b: Option<usize>, c: Option<usize>) -> Turn {
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => orientation_xy(
                self.positions[a],
                self.positions[b],
                self.positions[c],
                self.band,
            ),
            _ => Turn::Unbounded,
        }
    }

    /// Kinetic time of three optional slots; a missing slot or a turn inside
    /// the band never fires.
    pub fn time(&self, a: Option<usize>, b: Option<usize>, c: Option<usize>) -> f64 {
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => {
                kinetic_time(
                    self.positions[a],
                    self.positions[b],
                    self.positions[c],
                    self.band,
                )
            }
            _ => f64::INFINITY,
        }
    }
}
