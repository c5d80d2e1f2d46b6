#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Bounds-checked row vector with a start index.
///
/// A `TriVector` holds `len()` contiguous elements.  The start index
/// records the absolute column occupied by the first stored element,
/// so that row `r` of an `n × n` upper triangular matrix is a vector
/// of length `n - r` starting at column `r`.
///
/// Indexing is relative to the stored data: `v[0]` is the element in
/// column `v.start_index()`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct TriVector<T> {
    /// absolute column of the first stored element
    pub(crate) start: usize,
    /// stored elements
    pub(crate) data: Vec<T>,
}

mod core;
mod vector_math;
