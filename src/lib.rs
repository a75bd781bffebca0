//! Persistent sorted array with copy-on-write versions.
//!
//! A [`SortedArray`] keeps elements strictly sorted by an extracted key and
//! deduplicated on it. Lookups are binary searches; every update returns a
//! new array and leaves the receiver, and anything sharing its storage,
//! exactly as it was.
//!
//! # Key properties
//!
//! - **Sorted & unique**: keys strictly increase along the array
//! - **Persistent**: `upsert`/`delete` return a new version, never mutate
//! - **One search primitive**: every operation goes through a lower-bound search
//! - **Two backends**: `Arc<[T]>` blocks ([`SortedArray`]) or append-only
//!   arena blocks named by [`Version`] handles ([`VersionedArray`])
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use cow_sorted::{Pair, SortedArray};
//!
//! let empty = SortedArray::new();
//! let (a, _) = empty.upsert(Pair::new(5, "a"));
//! let (b, prev) = a.upsert(Pair::new(5, "c"));
//!
//! assert_eq!(prev, Some(&Pair::new(5, "a")));
//! assert_eq!(a.get(&5), Some(&Pair::new(5, "a")));
//! assert_eq!(b.get(&5), Some(&Pair::new(5, "c")));
//! assert!(empty.is_empty());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

use std::fmt;

pub mod error;
pub mod iter;
pub mod key;
pub mod pair;
pub mod slots;
pub mod store;
pub mod version;

mod arena;
mod arena_sync;
mod array;
mod ops;
mod versioned;

#[cfg(test)]
mod tests;

pub use arena::ElementArena;
pub use arena_sync::ElementArenaSync;
pub use array::SortedArray;
pub use error::OrderError;
pub use key::Keyed;
pub use pair::Pair;
pub use version::Version;
pub use versioned::{VersionedArray, VersionedArraySync};

/// Saved arena state for rollback.
///
/// Created by [`VersionedArray::checkpoint`]. Restoring via
/// [`VersionedArray::rollback`] discards every version allocated after it.
pub struct ArenaCheckpoint<T> {
    /// Element arena checkpoint.
    pub store: store::StoreCheckpoint<T>,
    /// Allocated element slots at checkpoint time.
    pub arena_len: usize,
    pub(crate) owner: u64,
    pub(crate) mark: u64,
}

// ArenaCheckpoint contains only indices, counters and ids — no actual T data.

impl<T> Clone for ArenaCheckpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaCheckpoint<T> {}

impl<T> fmt::Debug for ArenaCheckpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaCheckpoint")
            .field("arena_len", &self.arena_len)
            .finish_non_exhaustive()
    }
}
