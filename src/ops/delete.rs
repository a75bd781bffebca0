//! Removal — copy-on-write block builder.

use crate::ops::clone_span;
use crate::slots::Slots;

/// Copies the run without the element at position `at`.
pub fn build_removing<'a, T, S>(slots: S, at: usize) -> Vec<T>
where
    T: Clone + 'a,
    S: Slots<'a, T>,
{
    let len = slots.slot_count();
    let mut out = Vec::with_capacity(len - 1);
    clone_span(slots, 0, at, &mut out);
    clone_span(slots, at + 1, len, &mut out);
    out
}
