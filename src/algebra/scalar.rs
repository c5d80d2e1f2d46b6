use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};

/// Core trait for matrix and vector elements.
///
/// Elements must be copyable, comparable and printable, and provide
/// the arithmetic of [`num_traits::Num`] (including `zero()`) together
/// with its assigning forms.  Blanket-implemented for every type
/// satisfying the bounds, which covers all primitive integer and
/// floating point types.
///
/// `ScalarT` relies on [`num_traits`](num_traits) for most of its
/// constituent trait bounds.
pub trait ScalarT: 'static + Copy + Num + NumAssign + PartialEq + Default + Display + Debug {}

impl<T> ScalarT for T where
    T: 'static + Copy + Num + NumAssign + PartialEq + Default + Display + Debug
{
}

#[test]
fn test_scalar_blanket_impl() {
    fn is_scalar<T: ScalarT>() -> T {
        T::zero()
    }
    assert_eq!(is_scalar::<i32>(), 0);
    assert_eq!(is_scalar::<u8>(), 0);
    assert_eq!(is_scalar::<f64>(), 0.0);
}
