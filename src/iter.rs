//! Ascending iterators over sorted arrays.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;

use crate::slots::Slots;

/// Iterator over references to elements in ascending key order.
///
/// Walks either a whole run or a sub-span of it, from both ends.
pub struct Iter<'a, T, S = &'a [T]> {
    slots: S,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S: Slots<'a, T>> Iter<'a, T, S> {
    /// Creates an iterator over every element of `slots`.
    pub fn new(slots: S) -> Self {
        let len = slots.slot_count();
        Self::with_span(slots, 0..len)
    }

    /// Creates an iterator over the positions in `span`, clamped to `slots`.
    ///
    /// An inverted span yields nothing.
    pub(crate) fn with_span(slots: S, span: Range<usize>) -> Self {
        let back = span.end.min(slots.slot_count());
        let front = span.start.min(back);
        Self {
            slots,
            front,
            back,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S: Slots<'a, T>> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let item = self.slots.slot(self.front);
            self.front += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T: 'a, S: Slots<'a, T>> DoubleEndedIterator for Iter<'a, T, S> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.slots.slot(self.back))
        } else {
            None
        }
    }
}

impl<'a, T: 'a, S: Slots<'a, T>> ExactSizeIterator for Iter<'a, T, S> {}

impl<'a, T: 'a, S: Slots<'a, T>> FusedIterator for Iter<'a, T, S> {}

impl<T, S: Copy> Clone for Iter<'_, T, S> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            _marker: PhantomData,
        }
    }
}

impl<T, S> fmt::Debug for Iter<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &(self.back - self.front))
            .finish_non_exhaustive()
    }
}

/// Visits elements in order until `visit` returns `false`.
///
/// Returns `false` if the walk stopped early, `true` if every element was
/// visited.
pub(crate) fn visit_all<'a, T, I, F>(iter: I, mut visit: F) -> bool
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    F: FnMut(&'a T) -> bool,
{
    for x in iter {
        if !visit(x) {
            return false;
        }
    }
    true
}
