//! Key extraction for sorted elements.

/// An element that carries its own ordering key.
///
/// The key must be stable: calling [`key`](Self::key) on the same element
/// must always yield an equal key. Arrays built from elements whose keys
/// change, or whose `Ord` is not a total order, may silently lose their
/// sortedness and uniqueness guarantees.
pub trait Keyed {
    /// Totally ordered key type.
    type Key: Ord;

    /// Returns the key this element is sorted and deduplicated by.
    fn key(&self) -> &Self::Key;
}

// ---------------------------------------------------------------------------
// Self-keyed scalars — the element is its own key
// ---------------------------------------------------------------------------

macro_rules! self_keyed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = Self;

                #[inline]
                fn key(&self) -> &Self {
                    self
                }
            }
        )*
    };
}

self_keyed!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String,
);

impl<K: Ord, V> Keyed for (K, V) {
    type Key = K;

    #[inline]
    fn key(&self) -> &K {
        &self.0
    }
}
