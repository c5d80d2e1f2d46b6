use crate::algebra::{ScalarT, TriVector, TriuError, TriuMatrix, MAX_MATRIX_SIZE};
use crate::settings::MatrixSettings;
use std::ops::{Index, IndexMut};

impl<T> TriuMatrix<T>
where
    T: ScalarT,
{
    /// Zero initialized `size × size` upper triangular matrix.
    ///
    /// Fails with [`TriuError::InvalidSize`] unless
    /// `1 <= size <= MAX_MATRIX_SIZE`.
    pub fn new(size: usize) -> Result<Self, TriuError> {
        Self::new_bounded(size, MAX_MATRIX_SIZE)
    }

    /// As [`new`](TriuMatrix::new), but bounded by `settings.max_size`.
    /// The bound never exceeds `MAX_MATRIX_SIZE`.
    pub fn new_with_settings(size: usize, settings: &MatrixSettings) -> Result<Self, TriuError> {
        Self::new_bounded(size, settings.max_size.min(MAX_MATRIX_SIZE))
    }

    fn new_bounded(size: usize, max: usize) -> Result<Self, TriuError> {
        check_size(size, max)?;
        let rows = (0..size).map(|r| TriVector::new(size - r, r)).collect();
        Ok(Self { n: size, rows })
    }

    /// Build a matrix from packed row data.  Row `r` must hold exactly
    /// `rows.len() - r` elements.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, TriuError> {
        let n = rows.len();
        check_size(n, MAX_MATRIX_SIZE)?;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != n - r {
                return Err(TriuError::RowLength {
                    row: r,
                    expected: n - r,
                    found: row.len(),
                });
            }
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(r, data)| TriVector::from_vec(data, r))
            .collect();

        Ok(Self { n, rows })
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Checked access to row `r`.
    pub fn row(&self, r: usize) -> Result<&TriVector<T>, TriuError> {
        let bound = self.n;
        self.rows
            .get(r)
            .ok_or(TriuError::IndexOutOfRange { index: r, bound })
    }

    /// Checked mutable access to the stored elements of row `r`.
    /// Only element values can be changed, never the row length.
    pub fn row_mut(&mut self, r: usize) -> Result<&mut [T], TriuError> {
        let bound = self.n;
        self.rows
            .get_mut(r)
            .map(|row| row.data_mut())
            .ok_or(TriuError::IndexOutOfRange { index: r, bound })
    }

    /// Checked equivalent of `&m[r][c]`.
    pub fn get(&self, r: usize, c: usize) -> Result<&T, TriuError> {
        self.row(r)?.get(c)
    }

    /// Checked equivalent of `&mut m[r][c]`.
    pub fn get_mut(&mut self, r: usize, c: usize) -> Result<&mut T, TriuError> {
        let row = self.row_mut(r)?;
        let bound = row.len();
        row.get_mut(c)
            .ok_or(TriuError::IndexOutOfRange { index: c, bound })
    }

    /// Checked equivalent of `m[r][c] = v`.
    pub fn set(&mut self, r: usize, c: usize, v: T) -> Result<(), TriuError> {
        *self.get_mut(r, c)? = v;
        Ok(())
    }

    /// Value at absolute position `(r, col)`.  Positions below the
    /// diagonal read as zero.
    pub fn entry(&self, r: usize, col: usize) -> Result<T, TriuError> {
        let row = self.row(r)?;
        if col >= self.n {
            return Err(TriuError::IndexOutOfRange {
                index: col,
                bound: self.n,
            });
        }
        if col < row.start_index() {
            return Ok(T::zero());
        }
        row.get(col - row.start_index()).copied()
    }

    pub fn iter_rows(&self) -> std::slice::Iter<'_, TriVector<T>> {
        self.rows.iter()
    }

    /// Make `self` a deep copy of `src`.  The dimension of `self` is
    /// changed to match `src` if required.
    pub fn assign(&mut self, src: &Self) -> &mut Self {
        if self.n == src.n {
            for (dst, row) in self.rows.iter_mut().zip(src.rows.iter()) {
                dst.copy_from(row);
            }
        } else {
            self.n = src.n;
            self.rows = src.rows.clone();
        }
        self
    }

    /// Check that the row storage is consistent with the dimension.
    pub fn is_consistent(&self) -> bool {
        self.rows.len() == self.n
            && self
                .rows
                .iter()
                .enumerate()
                .all(|(r, row)| row.start_index() == r && row.len() == self.n - r)
    }
}

pub(crate) fn check_size(size: usize, max: usize) -> Result<(), TriuError> {
    if size == 0 || size > max {
        return Err(TriuError::InvalidSize { size, max });
    }
    Ok(())
}

impl<T> Clone for TriuMatrix<T>
where
    T: ScalarT,
{
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

// m[r] is the slice of stored elements of row r, so that m[r][c]
// is the c-th stored element of that row

impl<T> Index<usize> for TriuMatrix<T>
where
    T: ScalarT,
{
    type Output = [T];
    fn index(&self, r: usize) -> &Self::Output {
        match self.row(r) {
            Ok(row) => row.data(),
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for TriuMatrix<T>
where
    T: ScalarT,
{
    fn index_mut(&mut self, r: usize) -> &mut Self::Output {
        match self.row_mut(r) {
            Ok(row) => row,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::fmt::Display for TriuMatrix<T>
where
    T: ScalarT,
{
    // prints the full square, with zeros below the diagonal
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.rows.iter() {
            write!(f, "[")?;
            for _ in 0..row.start_index() {
                write!(f, " {}", T::zero())?;
            }
            for v in row.data() {
                write!(f, " {}", v)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
