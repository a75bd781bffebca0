//! Storage abstraction for arena-backed versions.

use safe_bump::{Checkpoint, Idx};

/// Saved state of an element arena.
pub struct StoreCheckpoint<T> {
    /// Elements arena checkpoint.
    pub elements: Checkpoint<T>,
}

// StoreCheckpoint holds only a Checkpoint<T> (Copy) — no T data.

impl<T> Clone for StoreCheckpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StoreCheckpoint<T> {}

/// Append-only storage backend for version blocks.
///
/// Abstracts over [`Arena`](safe_bump::Arena) (single-thread) and
/// [`SharedArena`](safe_bump::SharedArena) (multi-thread) backends. Blocks
/// are never written after allocation, which is what keeps every older
/// version intact.
pub trait ElementStore<T> {
    /// Allocates a contiguous block of elements, returning the index of the
    /// first one. Returns `None` if the iterator is empty.
    fn alloc_elements(&mut self, iter: impl IntoIterator<Item = T>) -> Option<Idx<T>>;

    /// Returns a reference to the element at `idx`.
    fn get_element(&self, idx: Idx<T>) -> &T;

    /// Saves the current state of the arena.
    fn checkpoint(&self) -> StoreCheckpoint<T>;

    /// Rolls the arena back to a previous checkpoint, dropping every element
    /// allocated since.
    fn rollback(&mut self, cp: StoreCheckpoint<T>);

    /// Returns the total number of allocated elements.
    ///
    /// Includes superseded copies — reflects true memory footprint.
    fn arena_len(&self) -> usize;
}
