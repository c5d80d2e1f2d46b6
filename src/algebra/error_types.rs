use thiserror::Error;

/// Error type returned by triangular matrix and row vector operations.
///
/// Every check happens before any data is modified, so an operation
/// that returns one of these leaves its operands untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriuError {
    /// Requested matrix dimension is zero or above the permitted maximum
    #[error("invalid matrix size {size} (must lie in 1..={max})")]
    InvalidSize { size: usize, max: usize },
    /// Row or element index is at or beyond the valid bound
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange { index: usize, bound: usize },
    /// Operands of an elementwise operation have incompatible dimensions
    #[error("size mismatch ({left} vs {right})")]
    SizeMismatch { left: usize, right: usize },
    /// Row data supplied for a matrix has the wrong number of elements
    #[error("row {row} has {found} elements, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}
