//! Algebra for upper triangular matrices.
//!
//! This module provides the row vector type [`TriVector`], the packed
//! upper triangular matrix [`TriuMatrix`] built on top of it, and the
//! element trait [`ScalarT`] that both are generic over.
//!
//! All checked operations return [`TriuError`] on failure.  Indexing
//! and arithmetic operator implementations panic with the same error
//! message instead, and each has a fallible counterpart.

/// Largest permitted matrix dimension.
pub const MAX_MATRIX_SIZE: usize = 10000;

mod error_types;
mod scalar;
mod triu;
mod trivector;

pub use error_types::*;
pub use scalar::*;
pub use triu::*;
pub use trivector::*;

#[cfg(test)]
mod tests;
