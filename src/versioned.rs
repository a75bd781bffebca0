//! Arena-backed sorted array with explicit version handles.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::ArenaCheckpoint;
use crate::arena::ElementArena;
use crate::arena_sync::ElementArenaSync;
use crate::array::SortedArray;
use crate::iter::{self, Iter};
use crate::key::Keyed;
use crate::ops::search;
use crate::ops::upsert::{self, Placement};
use crate::ops::{delete, range};
use crate::slots::Slots;
use crate::store::ElementStore;
use crate::version::{Block, Lineage, Version};

/// Sorted array whose versions all live in one append-only arena.
///
/// Each update copies the affected version into a fresh arena block and
/// returns a [`Version`] naming it. Blocks are never written again, so every
/// earlier version stays readable until a [`rollback`](Self::rollback)
/// discards it.
///
/// # Panics
///
/// Every method taking a [`Version`] panics if that version is not
/// [live](Self::is_live) here: discarded by a rollback, or allocated by
/// another array.
pub struct VersionedArray<T, S = ElementArena<T>> {
    store: S,
    lineage: Lineage,
    _marker: PhantomData<T>,
}

/// [`VersionedArray`] backed by a [`SharedArena`](safe_bump::SharedArena),
/// for `Send + Sync` support. Create one with `VersionedArraySync::default()`.
pub type VersionedArraySync<T> = VersionedArray<T, ElementArenaSync<T>>;

// ---------------------------------------------------------------------------
// Construction & accessors — no key bounds
// ---------------------------------------------------------------------------

impl<T> VersionedArray<T> {
    /// Creates an array with an empty single-threaded arena.
    ///
    /// Other backends start from [`with_store`](Self::with_store) or
    /// [`Default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(ElementArena::new())
    }
}

impl<T, S: ElementStore<T>> VersionedArray<T, S> {
    /// Creates an array over an existing store.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            lineage: Lineage::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the version holding no elements.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn empty(&self) -> Version<T> {
        Version::empty()
    }

    /// Returns `true` if `version` can be read from this array.
    ///
    /// A version is live when this array allocated it and no
    /// [`rollback`](Self::rollback) has discarded it since. The empty
    /// version is live everywhere.
    #[must_use]
    pub fn is_live(&self, version: Version<T>) -> bool {
        self.lineage.vouches_for(version)
    }

    /// Returns the total number of allocated element slots.
    ///
    /// Includes superseded copies — reflects true memory footprint.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.store.arena_len()
    }

    /// Saves the arena state for later rollback.
    #[must_use]
    pub fn checkpoint(&self) -> ArenaCheckpoint<T> {
        let arena_len = self.store.arena_len();
        tracing::debug!(arena_len, "arena checkpoint");
        ArenaCheckpoint {
            store: self.store.checkpoint(),
            arena_len,
            owner: self.lineage.owner(),
            mark: self.lineage.mark(),
        }
    }

    /// Restores the arena to a previously saved checkpoint.
    ///
    /// Versions created after the checkpoint are discarded; reading one
    /// afterwards panics, even once new versions reuse its arena slots.
    /// Versions created before it are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `cp` was taken on a different array.
    pub fn rollback(&mut self, cp: ArenaCheckpoint<T>) {
        assert_eq!(
            cp.owner,
            self.lineage.owner(),
            "checkpoint belongs to another array"
        );
        tracing::debug!(
            from = self.store.arena_len(),
            to = cp.arena_len,
            "arena rollback"
        );
        self.store.rollback(cp.store);
        self.lineage.discard_since(cp.mark);
    }

    /// Returns an iterator over `version`'s elements in ascending key order.
    #[must_use]
    pub fn iter(&self, version: Version<T>) -> Iter<'_, T, Block<'_, T, S>> {
        Iter::new(self.view(version))
    }

    /// Calls `visit` on each element of `version` in ascending key order.
    ///
    /// Returns `false` if `visit` stopped the walk, `true` otherwise.
    pub fn ascend<F: FnMut(&T) -> bool>(&self, version: Version<T>, visit: F) -> bool {
        iter::visit_all(self.iter(version), visit)
    }

    /// Copies `items` into a new block. An empty block is the empty version.
    fn alloc(&mut self, items: Vec<T>) -> Version<T> {
        let len = items.len();
        match self.store.alloc_elements(items) {
            Some(start) => {
                tracing::trace!(start = start.into_raw(), len, "allocated version block");
                self.lineage.issue(start, len)
            }
            None => Version::empty(),
        }
    }

    /// Binds a live version to the arena.
    fn view(&self, version: Version<T>) -> Block<'_, T, S> {
        assert!(
            self.lineage.vouches_for(version),
            "{version:?} is not live in this array"
        );
        version.view(&self.store)
    }
}

// ---------------------------------------------------------------------------
// Read operations — T: Keyed
// ---------------------------------------------------------------------------

impl<T: Keyed, S: ElementStore<T>> VersionedArray<T, S> {
    /// Returns `true` if `version` holds an element with this key.
    #[must_use]
    pub fn has<Q>(&self, version: Version<T>, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::lower_bound(self.view(version), key).found
    }

    /// Returns `version`'s element stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, version: Version<T>, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let block = self.view(version);
        search::position(block, key).map(|at| block.slot(at))
    }

    /// Returns an iterator over `version`'s elements with keys in `[low, high]`.
    #[must_use]
    pub fn range<Q>(
        &self,
        version: Version<T>,
        low: &Q,
        high: &Q,
    ) -> Iter<'_, T, Block<'_, T, S>>
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let block = self.view(version);
        Iter::with_span(block, range::span(block, low, high))
    }

    /// Calls `visit` on each element of `version` with a key in
    /// `[low, high]`, stopping early when `visit` returns `false`.
    pub fn ascend_range<Q, F>(&self, version: Version<T>, low: &Q, high: &Q, visit: F) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
        F: FnMut(&T) -> bool,
    {
        iter::visit_all(self.range(version, low, high), visit)
    }
}

// ---------------------------------------------------------------------------
// Write operations — T: Keyed + Clone
// ---------------------------------------------------------------------------

impl<T: Keyed + Clone, S: ElementStore<T>> VersionedArray<T, S> {
    /// Returns a new version holding `x` on top of `version`, replacing any
    /// element with the same key. The replaced element is returned.
    pub fn upsert(&mut self, version: Version<T>, x: T) -> (Version<T>, Option<T>) {
        let block = self.view(version);
        let placement = upsert::plan(block, x.key());
        let previous = match placement {
            Placement::Replace(at) => Some(block.slot(at).clone()),
            Placement::Insert(_) => None,
        };
        let items = upsert::build(block, placement, x);
        (self.alloc(items), previous)
    }

    /// Returns a new version of `version` without the element stored under
    /// `key`, together with the removed element.
    ///
    /// A missing key allocates nothing and returns `version` itself.
    pub fn delete<Q>(&mut self, version: Version<T>, key: &Q) -> (Version<T>, Option<T>)
    where
        T::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let block = self.view(version);
        let Some(at) = search::position(block, key) else {
            return (version, None);
        };
        let removed = block.slot(at).clone();
        let items = delete::build_removing(block, at);
        (self.alloc(items), Some(removed))
    }

    /// Copies a [`SortedArray`] into the arena as a new version.
    pub fn import(&mut self, array: &SortedArray<T>) -> Version<T> {
        self.alloc(array.as_slice().to_vec())
    }

    /// Materialises `version` as a standalone [`SortedArray`].
    #[must_use]
    pub fn snapshot(&self, version: Version<T>) -> SortedArray<T> {
        SortedArray::from_block(self.iter(version).cloned().collect())
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<T, S: ElementStore<T> + Default> Default for VersionedArray<T, S> {
    fn default() -> Self {
        Self::with_store(S::default())
    }
}

impl<T, S: ElementStore<T>> fmt::Debug for VersionedArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionedArray")
            .field("arena_len", &self.store.arena_len())
            .finish_non_exhaustive()
    }
}
