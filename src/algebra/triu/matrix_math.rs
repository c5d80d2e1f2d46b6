use crate::algebra::{ScalarT, TriuError, TriuMatrix};
use itertools::izip;
use std::ops::{Add, AddAssign, Sub, SubAssign};

impl<T> TriuMatrix<T>
where
    T: ScalarT,
{
    fn check_same_size(&self, other: &Self) -> Result<(), TriuError> {
        if self.n != other.n {
            return Err(TriuError::SizeMismatch {
                left: self.n,
                right: other.n,
            });
        }
        Ok(())
    }

    /// Elementwise sum `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self, TriuError> {
        let mut out = self.clone();
        out.try_add_assign(other)?;
        Ok(out)
    }

    /// Elementwise difference `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, TriuError> {
        let mut out = self.clone();
        out.try_sub_assign(other)?;
        Ok(out)
    }

    /// In-place `self += other`.  `self` is unchanged on failure.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<&mut Self, TriuError> {
        self.check_same_size(other)?;
        for (row, x) in izip!(&mut self.rows, &other.rows) {
            row.add_from(x);
        }
        Ok(self)
    }

    /// In-place `self -= other`.  `self` is unchanged on failure.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<&mut Self, TriuError> {
        self.check_same_size(other)?;
        for (row, x) in izip!(&mut self.rows, &other.rows) {
            row.sub_from(x);
        }
        Ok(self)
    }

    /// Elementwise scaling of the stored triangle.
    pub fn scale(&mut self, c: T) -> &mut Self {
        self.rows.iter_mut().for_each(|row| {
            row.scale(c);
        });
        self
    }

    /// Elementwise translation of the stored triangle.
    pub fn translate(&mut self, c: T) -> &mut Self {
        self.rows.iter_mut().for_each(|row| {
            row.translate(c);
        });
        self
    }
}

// Operator forms panic on dimension mismatch.  Use the try_*
// methods for a fallible version.

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $try_method:ident) => {
        impl<T: ScalarT> $Trait<&TriuMatrix<T>> for &TriuMatrix<T> {
            type Output = TriuMatrix<T>;
            fn $method(self, rhs: &TriuMatrix<T>) -> TriuMatrix<T> {
                match self.$try_method(rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<T: ScalarT> $Trait<TriuMatrix<T>> for TriuMatrix<T> {
            type Output = TriuMatrix<T>;
            fn $method(self, rhs: TriuMatrix<T>) -> TriuMatrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: ScalarT> $Trait<&TriuMatrix<T>> for TriuMatrix<T> {
            type Output = TriuMatrix<T>;
            fn $method(self, rhs: &TriuMatrix<T>) -> TriuMatrix<T> {
                (&self).$method(rhs)
            }
        }
    };
}

impl_binop!(Add, add, try_add);
impl_binop!(Sub, sub, try_sub);

impl<T: ScalarT> AddAssign<&TriuMatrix<T>> for TriuMatrix<T> {
    fn add_assign(&mut self, rhs: &TriuMatrix<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("{}", e);
        }
    }
}

impl<T: ScalarT> SubAssign<&TriuMatrix<T>> for TriuMatrix<T> {
    fn sub_assign(&mut self, rhs: &TriuMatrix<T>) {
        if let Err(e) = self.try_sub_assign(rhs) {
            panic!("{}", e);
        }
    }
}
