//! Lower-bound binary search — the one search primitive every operation uses.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::key::Keyed;
use crate::slots::Slots;

/// Result of a lower-bound search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Search {
    /// First position whose key is `>= target`, or the run length if none.
    pub index: usize,
    /// `true` if the key at `index` equals the target.
    pub found: bool,
}

/// Finds the first slot whose key is not less than `target`.
///
/// Keys are unique, so an exact hit is already the lower bound and the
/// search stops there.
pub fn lower_bound<'a, T, Q, S>(slots: S, target: &Q) -> Search
where
    T: Keyed + 'a,
    T::Key: Borrow<Q>,
    Q: Ord + ?Sized,
    S: Slots<'a, T>,
{
    let mut lo = 0;
    let mut hi = slots.slot_count();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match slots.slot(mid).key().borrow().cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => {
                return Search {
                    index: mid,
                    found: true,
                };
            }
        }
    }
    Search {
        index: lo,
        found: false,
    }
}

/// Returns the position of `target` if present.
#[inline]
pub fn position<'a, T, Q, S>(slots: S, target: &Q) -> Option<usize>
where
    T: Keyed + 'a,
    T::Key: Borrow<Q>,
    Q: Ord + ?Sized,
    S: Slots<'a, T>,
{
    let s = lower_bound(slots, target);
    s.found.then_some(s.index)
}
