//! Version handles and arena block views.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use safe_bump::Idx;

use crate::slots::Slots;
use crate::store::ElementStore;

/// Handle naming one immutable sorted block inside a
/// [`VersionedArray`](crate::VersionedArray).
///
/// Besides the block's index and length, a version records which array
/// allocated it and an allocation stamp. It stays readable until a rollback
/// past its creation; after that, and on any other array, it is dead.
pub struct Version<T> {
    start: Idx<T>,
    len: usize,
    owner: u64,
    stamp: u64,
}

impl<T> Version<T> {
    /// The version holding no elements.
    ///
    /// Its start index is dead state — never read because `len == 0`.
    /// It belongs to no array and is live in all of them.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: Idx::from_raw(0),
            len: 0,
            owner: 0,
            stamp: 0,
        }
    }

    /// Returns the number of elements in this version.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if this version holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Binds this version to its store for reading.
    pub(crate) const fn view<'a, S>(self, store: &'a S) -> Block<'a, T, S>
    where
        T: 'a,
    {
        Block {
            store,
            version: self,
            _marker: PhantomData,
        }
    }
}

/// Offsets a base index by `n` positions.
#[inline]
#[must_use]
pub const fn offset<T>(base: Idx<T>, n: usize) -> Idx<T> {
    Idx::from_raw(base.into_raw() + n)
}

// ---------------------------------------------------------------------------
// Manual trait impls — avoid false `T: Trait` bounds.
// Version contains only an index (Copy) and a length — no T data.
// ---------------------------------------------------------------------------

impl<T> Clone for Version<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Version<T> {}

impl<T> PartialEq for Version<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && (self.len == 0 || (self.owner == other.owner && self.stamp == other.stamp))
    }
}

impl<T> Eq for Version<T> {}

impl<T> Default for Version<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Version<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("start", &self.start.into_raw())
            .field("len", &self.len)
            .field("owner", &self.owner)
            .field("stamp", &self.stamp)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Lineage — which versions an array still vouches for
// ---------------------------------------------------------------------------

/// Counter for unique array ids. Zero is reserved for the empty version.
static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Issues stamped versions for one array and remembers which stamps a
/// rollback discarded.
///
/// Stamps are never reused, so a version allocated after a checkpoint stays
/// dead even once later allocations reoccupy its arena slots.
pub(crate) struct Lineage {
    owner: u64,
    next: u64,
    /// Sorted, disjoint stamp ranges discarded by rollbacks.
    dead: Vec<Range<u64>>,
}

impl Lineage {
    pub(crate) fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            next: 1,
            dead: Vec::new(),
        }
    }

    pub(crate) const fn owner(&self) -> u64 {
        self.owner
    }

    /// Returns the first stamp not yet issued.
    pub(crate) const fn mark(&self) -> u64 {
        self.next
    }

    /// Names a freshly allocated block.
    pub(crate) fn issue<T>(&mut self, start: Idx<T>, len: usize) -> Version<T> {
        let stamp = self.next;
        self.next += 1;
        Version {
            start,
            len,
            owner: self.owner,
            stamp,
        }
    }

    /// Kills every version issued at or after `mark`.
    pub(crate) fn discard_since(&mut self, mark: u64) {
        if mark >= self.next {
            return;
        }
        while self.dead.last().is_some_and(|r| r.start >= mark) {
            self.dead.pop();
        }
        match self.dead.last_mut() {
            Some(last) if last.end >= mark => last.end = self.next,
            _ => self.dead.push(mark..self.next),
        }
    }

    /// Returns `true` if `version` was issued here and not discarded since.
    pub(crate) fn vouches_for<T>(&self, version: Version<T>) -> bool {
        if version.is_empty() {
            return true;
        }
        if version.owner != self.owner || version.stamp >= self.next {
            return false;
        }
        let at = self.dead.partition_point(|r| r.end <= version.stamp);
        !self.dead.get(at).is_some_and(|r| r.contains(&version.stamp))
    }
}

// ---------------------------------------------------------------------------
// Block view
// ---------------------------------------------------------------------------

/// A version bound to the store that holds its block.
pub struct Block<'a, T, S> {
    store: &'a S,
    version: Version<T>,
    _marker: PhantomData<&'a T>,
}

impl<T, S> Clone for Block<'_, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for Block<'_, T, S> {}

impl<'a, T: 'a, S: ElementStore<T>> Slots<'a, T> for Block<'a, T, S> {
    #[inline]
    fn slot_count(self) -> usize {
        self.version.len
    }

    #[inline]
    fn slot(self, i: usize) -> &'a T {
        debug_assert!(i < self.version.len, "slot {i} out of bounds");
        self.store.get_element(offset(self.version.start, i))
    }
}
