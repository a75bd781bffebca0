//! Insert-or-replace — placement and copy-on-write block builders.

use std::borrow::Borrow;

use crate::key::Keyed;
use crate::ops::clone_span;
use crate::ops::search::lower_bound;
use crate::slots::Slots;

/// Where an upserted element lands in the new block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// An element with the same key sits at this position and is replaced.
    Replace(usize),
    /// No element has the key; the new one goes in at this position.
    Insert(usize),
}

/// Locates the slot for an element keyed by `key`.
pub fn plan<'a, T, Q, S>(slots: S, key: &Q) -> Placement
where
    T: Keyed + 'a,
    T::Key: Borrow<Q>,
    Q: Ord + ?Sized,
    S: Slots<'a, T>,
{
    let s = lower_bound(slots, key);
    if s.found {
        Placement::Replace(s.index)
    } else {
        Placement::Insert(s.index)
    }
}

/// Builds the block for `placement`: the old run with `x` put in place.
pub fn build<'a, T, S>(slots: S, placement: Placement, x: T) -> Vec<T>
where
    T: Clone + 'a,
    S: Slots<'a, T>,
{
    match placement {
        Placement::Replace(at) => build_replacing(slots, at, x),
        Placement::Insert(at) => build_inserting(slots, at, x),
    }
}

/// Copies the run with `x` inserted before position `at`.
pub fn build_inserting<'a, T, S>(slots: S, at: usize, x: T) -> Vec<T>
where
    T: Clone + 'a,
    S: Slots<'a, T>,
{
    let len = slots.slot_count();
    let mut out = Vec::with_capacity(len + 1);
    clone_span(slots, 0, at, &mut out);
    out.push(x);
    clone_span(slots, at, len, &mut out);
    out
}

/// Copies the run with the element at `at` swapped for `x`.
pub fn build_replacing<'a, T, S>(slots: S, at: usize, x: T) -> Vec<T>
where
    T: Clone + 'a,
    S: Slots<'a, T>,
{
    let len = slots.slot_count();
    let mut out = Vec::with_capacity(len);
    clone_span(slots, 0, at, &mut out);
    out.push(x);
    clone_span(slots, at + 1, len, &mut out);
    out
}
