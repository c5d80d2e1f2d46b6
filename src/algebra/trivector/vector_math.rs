use crate::algebra::{ScalarT, TriVector, TriuError};
use itertools::izip;

impl<T> TriVector<T>
where
    T: ScalarT,
{
    // vectors are only compatible if they cover the same columns
    fn check_compatible(&self, other: &Self) -> Result<(), TriuError> {
        if self.len() != other.len() {
            return Err(TriuError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        if self.start != other.start {
            return Err(TriuError::SizeMismatch {
                left: self.start,
                right: other.start,
            });
        }
        Ok(())
    }

    /// Elementwise sum `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self, TriuError> {
        self.check_compatible(other)?;
        let mut out = self.clone();
        out.add_from(other);
        Ok(out)
    }

    /// Elementwise difference `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, TriuError> {
        self.check_compatible(other)?;
        let mut out = self.clone();
        out.sub_from(other);
        Ok(out)
    }

    /// Inner product of two compatible vectors.
    pub fn dot(&self, other: &Self) -> Result<T, TriuError> {
        self.check_compatible(other)?;
        let mut out = T::zero();
        for (&x, &y) in izip!(&self.data, &other.data) {
            out += x * y;
        }
        Ok(out)
    }

    /// Elementwise translation.
    pub fn translate(&mut self, c: T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x += c);
        self
    }

    /// Elementwise scaling.
    pub fn scale(&mut self, c: T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x *= c);
        self
    }

    /// set all elements to the same value
    pub fn set(&mut self, c: T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x = c);
        self
    }

    // in-place elementwise ops.  dimensions already checked
    pub(crate) fn add_from(&mut self, x: &Self) {
        debug_assert_eq!(self.len(), x.len());
        for (y, &x) in izip!(&mut self.data, &x.data) {
            *y += x;
        }
    }

    pub(crate) fn sub_from(&mut self, x: &Self) {
        debug_assert_eq!(self.len(), x.len());
        for (y, &x) in izip!(&mut self.data, &x.data) {
            *y -= x;
        }
    }
}
