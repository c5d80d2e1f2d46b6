use crate::algebra::TriVector;

/// Square upper triangular matrix with packed row storage.
///
/// An `n × n` matrix stores only its upper triangle: row `r` is a
/// [`TriVector`] of length `n - r` covering columns `r..n`.  Entries
/// below the diagonal are implicitly zero and are not stored.
///
/// Element access chains two indexing operations, `m[r][c]`, where `c`
/// addresses the `c`-th *stored* element of row `r`, i.e. absolute
/// column `r + c`.  Use [`entry`](TriuMatrix::entry) for access by
/// absolute column.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// a = [1.  2.  3.]
///     [0.  4.  5.]
///     [0.  0.  6.]
/// ```
///
/// ```
/// use utmatrix::algebra::TriuMatrix;
///
/// let mut a = TriuMatrix::<f64>::new(3).unwrap();
/// a[0][0] = 1.; a[0][1] = 2.; a[0][2] = 3.;
/// a[1][0] = 4.; a[1][1] = 5.;
/// a[2][0] = 6.;
///
/// // or equivalently
/// let b = TriuMatrix::from_rows(vec![
///     vec![1., 2., 3.],
///     vec![4., 5.],
///     vec![6.],
/// ]).unwrap();
///
/// assert_eq!(a, b);
/// ```
#[derive(Debug, PartialEq)]
pub struct TriuMatrix<T> {
    /// matrix dimension
    pub(crate) n: usize,
    /// packed rows, row r starting at column r
    pub(crate) rows: Vec<TriVector<T>>,
}

mod core;
mod matrix_math;
#[cfg(feature = "serde")]
mod serialize;
