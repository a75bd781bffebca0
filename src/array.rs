//! Copy-on-write sorted array backed by a shared `Arc<[T]>` block.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::error::OrderError;
use crate::iter::{self, Iter};
use crate::key::Keyed;
use crate::ops::search;
use crate::ops::upsert::{self, Placement};
use crate::ops::{delete, range};

/// Persistent array of elements kept strictly sorted by key.
///
/// Every update returns a new array and leaves the receiver untouched.
/// Clones are O(1) and share the backing block; an update copies the block
/// once, so no live array ever observes a later array's changes.
pub struct SortedArray<T> {
    data: Arc<[T]>,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<T> SortedArray<T> {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::from_block(Vec::new())
    }

    /// Wraps a block the caller guarantees is strictly sorted by key.
    pub(crate) fn from_block(block: Vec<T>) -> Self {
        Self {
            data: Arc::from(block),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a slice, in ascending key order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the element with the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the element with the largest key.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns `true` if both arrays share the same backing block.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Returns an iterator over the elements in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Calls `visit` on each element in ascending key order.
    ///
    /// Stops as soon as `visit` returns `false` and returns `false`;
    /// returns `true` once every element has been visited.
    pub fn ascend<F: FnMut(&T) -> bool>(&self, visit: F) -> bool {
        iter::visit_all(self.iter(), visit)
    }
}

// ---------------------------------------------------------------------------
// Read operations — T: Keyed
// ---------------------------------------------------------------------------

impl<T: Keyed> SortedArray<T> {
    /// Builds an array from elements already strictly sorted by key.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] naming the first element whose key is not
    /// greater than its predecessor's.
    pub fn from_sorted(items: Vec<T>) -> Result<Self, OrderError> {
        if let Err(err) = check_order(&items) {
            tracing::debug!(index = err.index(), len = items.len(), "rejected unsorted input");
            return Err(err);
        }
        Ok(Self::from_block(items))
    }

    /// Returns `true` if an element with this key exists.
    #[must_use]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::lower_bound(self.as_slice(), key).found
    }

    /// Returns the element stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::position(self.as_slice(), key).map(|at| &self.data[at])
    }

    /// Returns the element for the first key in `keys` that is present.
    #[must_use]
    pub fn get_any<'q, Q, I>(&self, keys: I) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().find_map(|key| self.get(key))
    }

    /// Returns an iterator over elements whose keys lie in `[low, high]`.
    ///
    /// An inverted range (`low > high`) yields nothing.
    #[must_use]
    pub fn range<Q>(&self, low: &Q, high: &Q) -> Iter<'_, T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slots = self.as_slice();
        Iter::with_span(slots, range::span(slots, low, high))
    }

    /// Calls `visit` on each element with a key in `[low, high]`, in
    /// ascending order, with the early-exit contract of [`ascend`](Self::ascend).
    pub fn ascend_range<Q, F>(&self, low: &Q, high: &Q, visit: F) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnMut(&T) -> bool,
    {
        iter::visit_all(self.range(low, high), visit)
    }
}

// ---------------------------------------------------------------------------
// Write operations — T: Keyed + Clone
// ---------------------------------------------------------------------------

impl<T: Keyed + Clone> SortedArray<T> {
    /// Returns a new array holding `x`, replacing any element with the same key.
    ///
    /// The second field is the replaced element, still owned by `self`.
    #[must_use]
    pub fn upsert(&self, x: T) -> (Self, Option<&T>) {
        let slots = self.as_slice();
        let placement = upsert::plan(slots, x.key());
        let previous = match placement {
            Placement::Replace(at) => Some(&slots[at]),
            Placement::Insert(_) => None,
        };
        (Self::from_block(upsert::build(slots, placement, x)), previous)
    }

    /// Returns a new array without the element stored under `key`.
    ///
    /// A missing key is a no-op: the result shares `self`'s block and the
    /// second field is `None`.
    #[must_use]
    pub fn delete<Q>(&self, key: &Q) -> (Self, Option<&T>)
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.delete_if(key, |_| true)
    }

    /// Like [`delete`](Self::delete), but removes the element only if
    /// `pred` accepts it.
    #[must_use]
    pub fn delete_if<Q, P>(&self, key: &Q, pred: P) -> (Self, Option<&T>)
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
        P: FnOnce(&T) -> bool,
    {
        let slots = self.as_slice();
        if let Some(at) = search::position(slots, key) {
            let current = &slots[at];
            if pred(current) {
                return (
                    Self::from_block(delete::build_removing(slots, at)),
                    Some(current),
                );
            }
        }
        (self.clone(), None)
    }

    /// Returns an array that holds an element under `key`, building it with
    /// `make` only when the key is missing.
    ///
    /// The flag is `true` if `make` ran. The built element is placed by its
    /// own key; if that differs from `key` and is already present, the
    /// element stored there is replaced.
    #[must_use]
    pub fn get_or_insert_with<F>(&self, key: &T::Key, make: F) -> (Self, bool)
    where
        F: FnOnce() -> T,
    {
        let slots = self.as_slice();
        match upsert::plan(slots, key) {
            Placement::Replace(_) => (self.clone(), false),
            Placement::Insert(at) => {
                let x = make();
                let placement = if x.key() == key {
                    Placement::Insert(at)
                } else {
                    upsert::plan(slots, x.key())
                };
                (Self::from_block(upsert::build(slots, placement, x)), true)
            }
        }
    }

    /// Returns the element for the first key in `keys` that is present, or
    /// an array with `make()` inserted when none is.
    ///
    /// The second field is the element found in `self`, or `None` if `make`
    /// ran. The built element is placed by its own key and replaces any
    /// element already stored under it.
    #[must_use]
    pub fn get_or_insert_any<'q, Q, I, F>(&self, keys: I, make: F) -> (Self, Option<&T>)
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
        F: FnOnce() -> T,
    {
        if let Some(hit) = self.get_any(keys) {
            return (self.clone(), Some(hit));
        }
        let x = make();
        let slots = self.as_slice();
        let placement = upsert::plan::<T, T::Key, _>(slots, x.key());
        (Self::from_block(upsert::build(slots, placement, x)), None)
    }
}

/// Verifies that keys strictly increase along `items`.
fn check_order<T: Keyed>(items: &[T]) -> Result<(), OrderError> {
    for (i, pair) in items.windows(2).enumerate() {
        match pair[0].key().cmp(pair[1].key()) {
            Ordering::Less => {}
            Ordering::Equal => return Err(OrderError::DuplicateKey { index: i + 1 }),
            Ordering::Greater => return Err(OrderError::OutOfOrder { index: i + 1 }),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

// Manual Clone: sharing the Arc needs no `T: Clone`.
impl<T> Clone for SortedArray<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> Default for SortedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SortedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SortedArray<T> {}

/// Later elements win over earlier ones with the same key.
impl<T: Keyed> FromIterator<T> for SortedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort_by(|a, b| a.key().cmp(b.key()));
        let mut block: Vec<T> = Vec::with_capacity(items.len());
        for x in items {
            match block.last_mut() {
                Some(last) if last.key() == x.key() => *last = x,
                _ => block.push(x),
            }
        }
        Self::from_block(block)
    }
}

impl<T: Keyed + Clone> Extend<T> for SortedArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        *self = self.iter().cloned().chain(iter).collect();
    }
}

impl<T: Keyed> TryFrom<Vec<T>> for SortedArray<T> {
    type Error = OrderError;

    fn try_from(items: Vec<T>) -> Result<Self, OrderError> {
        Self::from_sorted(items)
    }
}

impl<T: Keyed> ops::Index<&T::Key> for SortedArray<T> {
    type Output = T;

    fn index(&self, key: &T::Key) -> &T {
        self.get(key).expect("key not found")
    }
}

impl<'a, T> IntoIterator for &'a SortedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Deserialises a sequence that must already be strictly sorted by key.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedArray<T>
where
    T: serde::Deserialize<'de> + Keyed,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_sorted(items).map_err(serde::de::Error::custom)
    }
}
