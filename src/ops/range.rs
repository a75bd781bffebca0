//! Bounds of an inclusive key range.

use std::borrow::Borrow;
use std::ops::Range;

use crate::key::Keyed;
use crate::ops::search::lower_bound;
use crate::slots::Slots;

/// Returns the positions of elements whose keys lie in `[low, high]`.
///
/// Both ends come from the lower-bound search. The upper end stops at the
/// insertion point of `high`, and reaches one past it only when `high` is
/// present. An inverted range (`low > high`) yields an empty span.
pub fn span<'a, T, Q, S>(slots: S, low: &Q, high: &Q) -> Range<usize>
where
    T: Keyed + 'a,
    T::Key: Borrow<Q>,
    Q: Ord + ?Sized,
    S: Slots<'a, T>,
{
    let start = lower_bound(slots, low).index;
    let upper = lower_bound(slots, high);
    let end = if upper.found {
        upper.index + 1
    } else {
        upper.index
    };
    if start < end { start..end } else { start..start }
}
