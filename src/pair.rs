//! Key-value element for sorted arrays.

use crate::key::Keyed;

/// A key paired with a value, ordered by key only.
///
/// Two pairs with equal keys occupy the same slot in a
/// [`SortedArray`](crate::SortedArray): upserting one replaces the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<K, V> {
    /// Ordering key.
    pub key: K,
    /// Payload.
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair.
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the pair into `(key, value)`.
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Ord, V> Keyed for Pair<K, V> {
    type Key = K;

    #[inline]
    fn key(&self) -> &K {
        &self.key
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}
