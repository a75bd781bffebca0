//! Arena-backed storage (single-threaded).

use safe_bump::{Arena, Idx};

use crate::store::{ElementStore, StoreCheckpoint};

/// Storage backend using one [`Arena`].
pub struct ElementArena<T> {
    elements: Arena<T>,
}

impl<T> ElementArena<T> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            elements: Arena::new(),
        }
    }
}

impl<T> Default for ElementArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ElementStore<T> for ElementArena<T> {
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
