//! # Hull Chain
//!
//! Index-based doubly linked chain over the sorted point slots.
//!
//! The slot array owns every point for the whole build; a chain is pure
//! topology. Each slot carries its `prev`/`next` neighbours and an explicit
//! [`Membership`]. A detached slot keeps the neighbours it would be linked
//! between, so a single [`ChainView::toggle`] both removes a linked slot and
//! restores a detached one. Forward and backward replays share it.
//!
//! A [`ChainView`] is a mutable window over a contiguous slot range. Slots
//! are always addressed by their global index; the recursive driver splits a
//! view into two disjoint halves.

/// Whether a slot is currently part of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// The neighbours point back at this slot.
    Linked,
    /// The neighbours are where the slot would be reinserted.
    Detached,
}

/// Structural change reported by a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The slot rejoined the chain.
    Insert,
    /// The slot left the chain.
    Delete,
}

impl Membership {
    /// Pure toggle: the next state and the change that leads to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinetic_hull::chain::{EventKind, Membership};
    ///
    /// assert_eq!(Membership::Linked.toggled(), (Membership::Detached, EventKind::Delete));
    /// assert_eq!(Membership::Detached.toggled(), (Membership::Linked, EventKind::Insert));
    /// ```
    pub fn toggled(self) -> (Membership, EventKind) {
        match self {
            Membership::Linked => (Membership::Detached, EventKind::Delete),
            Membership::Detached => (Membership::Linked, EventKind::Insert),
        }
    }
}

/// Adjacency record of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Left neighbour, `None` at the chain end.
    pub prev: Option<usize>,
    /// Right neighbour, `None` at the chain end.
    pub next: Option<usize>,
    /// Current membership.
    pub membership: Membership,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            prev: None,
            next: None,
            membership: Membership::Detached,
        }
    }
}

/// Mutable window over the links of the slots `start..start + len`.
#[derive(Debug)]
pub struct ChainView<'a> {
    start: usize,
    links: &'a mut [Link],
}

impl<'a> ChainView<'a> {
    /// Creates a view whose first link belongs to slot 0.
    pub fn new(links: &'a mut [Link]) -> Self {
        Self { start: 0, links }
    }

    /// First slot covered by the view.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last slot covered by the view.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.links.len()
    }

    /// Number of slots covered by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if the view covers no slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    fn link(&self, slot: usize) -> &Link {
        &self.links[slot - self.start]
    }

    #[inline]
    fn link_mut(&mut self, slot: usize) -> &mut Link {
        &mut self.links[slot - self.start]
    }

    /// Left neighbour of `slot`.
    #[inline]
    pub fn prev(&self, slot: usize) -> Option<usize> {
        self.link(slot).prev
    }

    /// Right neighbour of `slot`.
    #[inline]
    pub fn next(&self, slot: usize) -> Option<usize> {
        self.link(slot).next
    }

    /// Membership of `slot`.
    #[inline]
    pub fn membership(&self, slot: usize) -> Membership {
        self.link(slot).membership
    }

    /// Makes `slot` a chain of its own.
    pub fn isolate(&mut self, slot: usize) {
        *self.link_mut(slot) = Link {
            prev: None,
            next: None,
            membership: Membership::Linked,
        };
    }

    /// Sets `left.next = right` and `right.prev = left`.
    ///
    /// Slots previously between them are cut off without touching their
    /// own links or membership.
    pub fn connect(&mut self, left: usize, right: usize) {
        self.link_mut(left).next = Some(right);
        self.link_mut(right).prev = Some(left);
    }

    /// Links `slot` between `left` and `right`.
    pub fn splice(&mut self, left: usize, slot: usize, right: usize) {
        self.connect(left, slot);
        self.connect(slot, right);
        self.link_mut(slot).membership = Membership::Linked;
    }

    /// Removes a linked slot or restores a detached one.
    ///
    /// Missing neighbours (chain ends) are skipped.
    pub fn toggle(&mut self, slot: usize) -> EventKind {
        let Link {
            prev,
            next,
            membership,
        } = *self.link(slot);
        let (state, kind) = membership.toggled();
        let (after_prev, before_next) = match kind {
            EventKind::Delete => (next, prev),
            EventKind::Insert => (Some(slot), Some(slot)),
        };
        if let Some(prev) = prev {
            self.link_mut(prev).next = after_prev;
        }
        if let Some(next) = next {
            self.link_mut(next).prev = before_next;
        }
        self.link_mut(slot).membership = state;
        kind
    }

    /// Splits the view at slot `middle` into `start..middle` and
    /// `middle..end`.
    pub fn split_at(&mut self, middle: usize) -> (ChainView<'_>, ChainView<'_>) {
        let start = self.start;
        let (left, right) = self.links.split_at_mut(middle - start);
        (
            ChainView { start, links: left },
            ChainView {
                start: middle,
                links: right,
            },
        )
    }

    /// Slots reached by following `next` from `from`, `from` included.
    pub fn walk(&self, from: usize) -> Walk<'_, 'a> {
        Walk {
            view: self,
            cursor: Some(from),
            remaining: self.len(),
        }
    }
}

/// Iterator returned by [`ChainView::walk`].
#[derive(Debug)]
pub struct Walk<'v, 'a> {
    view: &'v ChainView<'a>,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Walk<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.view.next(slot);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(links: &mut [Link]) -> ChainView<'_> {
        let mut view = ChainView::new(links);
        for slot in 0..view.len() {
            view.isolate(slot);
        }
        for slot in 1..view.len() {
            view.connect(slot - 1, slot);
        }
        view
    }

    #[test]
    fn test_toggle_removes_and_restores() {
        let mut links = vec![Link::default(); 3];
        let mut view = linear(&mut links);

        assert_eq!(view.toggle(1), EventKind::Delete);
        assert_eq!(view.walk(0).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(view.membership(1), Membership::Detached);
        // The detached slot remembers where it belongs
        assert_eq!((view.prev(1), view.next(1)), (Some(0), Some(2)));

        assert_eq!(view.toggle(1), EventKind::Insert);
        assert_eq!(view.walk(0).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(view.membership(1), Membership::Linked);
    }

    #[test]
    fn test_toggle_at_chain_end() {
        let mut links = vec![Link::default(); 2];
        let mut view = linear(&mut links);

        assert_eq!(view.toggle(1), EventKind::Delete);
        assert_eq!(view.next(0), None);
        assert_eq!(view.toggle(1), EventKind::Insert);
        assert_eq!(view.next(0), Some(1));
    }

    #[test]
    fn test_splice_and_connect() {
        let mut links = vec![Link::default(); 4];
        let mut view = linear(&mut links);

        view.connect(0, 3);
        assert_eq!(view.walk(0).collect::<Vec<_>>(), vec![0, 3]);

        view.splice(0, 2, 3);
        assert_eq!(view.walk(0).collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(view.membership(2), Membership::Linked);
    }

    #[test]
    fn test_split_uses_global_slots() {
        let mut links = vec![Link::default(); 6];
        let mut view = ChainView::new(&mut links);
        let (mut left, mut right) = view.split_at(2);
        assert_eq!((left.start(), left.end()), (0, 2));
        assert_eq!((right.start(), right.end()), (2, 6));

        right.isolate(4);
        right.isolate(5);
        right.connect(4, 5);
        left.isolate(1);
        assert_eq!(right.walk(4).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(left.walk(1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_walk_stops_on_cycle() {
        let mut links = vec![Link::default(); 2];
        let mut view = linear(&mut links);
        view.connect(1, 0);
        assert_eq!(view.walk(0).count(), 2);
    }
}
