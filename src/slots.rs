//! Read-only views over sorted runs of elements.

/// Read-only view of one sorted run of elements.
///
/// Implemented by `&[T]` and by the arena block view behind a
/// [`Version`](crate::Version). Implementors are cheap `Copy` handles;
/// `slot(i)` must be valid for every `i < slot_count()`.
pub trait Slots<'a, T: 'a>: Copy {
    /// Number of elements in the run.
    fn slot_count(self) -> usize;

    /// Returns the element at position `i`.
    fn slot(self, i: usize) -> &'a T;
}

impl<'a, T> Slots<'a, T> for &'a [T] {
    #[inline]
    fn slot_count(self) -> usize {
        self.len()
    }

    #[inline]
    fn slot(self, i: usize) -> &'a T {
        &self[i]
    }
}
