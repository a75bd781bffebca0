//! Algorithms shared by the `Arc`-backed and arena-backed arrays.
//!
//! Every operation reads a sorted run through a [`Slots`] view, so the same
//! lower-bound search and block builders serve both backends.

pub mod delete;
pub mod range;
pub mod search;
pub mod upsert;

use crate::slots::Slots;

/// Clones every slot in `from..to`, in order, into `out`.
pub fn clone_span<'a, T, S>(slots: S, from: usize, to: usize, out: &mut Vec<T>)
where
    T: Clone + 'a,
    S: Slots<'a, T>,
{
    for i in from..to {
        out.push(slots.slot(i).clone());
    }
}
