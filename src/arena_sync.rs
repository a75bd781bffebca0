//! Shared-arena-backed storage (multi-threaded).

use safe_bump::{Idx, SharedArena};

use crate::store::{ElementStore, StoreCheckpoint};

/// Thread-safe storage backend using one [`SharedArena`].
pub struct ElementArenaSync<T> {
    elements: SharedArena<T>,
}

impl<T> ElementArenaSync<T> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            elements: SharedArena::new(),
        }
    }
}

impl<T> Default for ElementArenaSync<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementStore<T> for ElementArenaSync<T> {
    fn alloc_elements(&mut self, iter: impl IntoIterator<Item = T>) -> Option<Idx<T>> {
        self.elements.alloc_extend(iter)
    }

    fn get_element(&self, idx: Idx<T>) -> &T {
        self.elements.get(idx)
    }

    fn checkpoint(&self) -> StoreCheckpoint<T> {
        StoreCheckpoint {
            elements: self.elements.checkpoint(),
        }
    }

    fn rollback(&mut self, cp: StoreCheckpoint<T>) {
        self.elements.rollback(cp.elements);
    }

    fn arena_len(&self) -> usize {
        self.elements.len()
    }
}
