use crate::algebra::{ScalarT, TriVector, TriuError};
use std::ops::{Index, IndexMut};

impl<T> TriVector<T>
where
    T: ScalarT,
{
    /// Zero initialized vector of length `len` starting at column `start`.
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            start,
            data: vec![T::zero(); len],
        }
    }

    pub fn from_vec(data: Vec<T>, start: usize) -> Self {
        Self { start, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Absolute column of the first stored element.
    pub fn start_index(&self) -> usize {
        self.start
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Checked access to the `idx`-th stored element.
    pub fn get(&self, idx: usize) -> Result<&T, TriuError> {
        let bound = self.len();
        self.data
            .get(idx)
            .ok_or(TriuError::IndexOutOfRange { index: idx, bound })
    }

    /// Checked mutable access to the `idx`-th stored element.
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T, TriuError> {
        let bound = self.len();
        self.data
            .get_mut(idx)
            .ok_or(TriuError::IndexOutOfRange { index: idx, bound })
    }

    /// Overwrite the contents of `self` with those of `src`, reusing
    /// the existing allocation where possible.
    pub(crate) fn copy_from(&mut self, src: &Self) -> &mut Self {
        self.start = src.start;
        self.data.clear();
        self.data.extend_from_slice(&src.data);
        self
    }
}

impl<T> Index<usize> for TriVector<T>
where
    T: ScalarT,
{
    type Output = T;
    fn index(&self, idx: usize) -> &Self::Output {
        match self.get(idx) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for TriVector<T>
where
    T: ScalarT,
{
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match self.get_mut(idx) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::fmt::Display for TriVector<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for v in self.data.iter() {
            write!(f, " {}", v)?;
        }
        write!(f, " ]")
    }
}
