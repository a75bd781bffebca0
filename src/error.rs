//! Errors raised by checked construction.

use thiserror::Error;

/// A sequence rejected because it is not strictly sorted by key.
///
/// Positions refer to the offending element in the input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The element's key is less than its predecessor's.
    #[error("element at index {index} is out of key order")]
    OutOfOrder {
        /// Position of the element.
        index: usize,
    },
    /// The element's key equals its predecessor's.
    #[error("element at index {index} repeats the key of its predecessor")]
    DuplicateKey {
        /// Position of the second occurrence.
        index: usize,
    },
}

impl OrderError {
    /// Returns the position of the offending element.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::OutOfOrder { index } | Self::DuplicateKey { index } => *index,
        }
    }
}
