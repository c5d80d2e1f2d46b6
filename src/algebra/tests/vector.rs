use crate::algebra::*;

fn test_vector_pair() -> (TriVector<i32>, TriVector<i32>) {
    let x = TriVector::from_vec(vec![3, 0, 2, 1], 1);
    let y = TriVector::from_vec(vec![1, 4, -2, 5], 1);
    (x, y)
}

#[test]
fn test_new_is_zero() {
    let v = TriVector::<f64>::new(4, 2);
    assert_eq!(v.len(), 4);
    assert_eq!(v.start_index(), 2);
    assert!(v.data().iter().all(|&x| x == 0.));

    let v = TriVector::<f64>::new(0, 0);
    assert!(v.is_empty());
}

#[test]
fn test_get_and_index() {
    let (mut x, _) = test_vector_pair();
    assert_eq!(x.get(2), Ok(&2));
    assert_eq!(x[3], 1);

    x[0] = 7;
    *x.get_mut(1).unwrap() = -1;
    assert_eq!(x.data(), &[7, -1, 2, 1]);
}

#[test]
fn test_get_out_of_range() {
    let (mut x, _) = test_vector_pair();
    assert_eq!(
        x.get(4),
        Err(TriuError::IndexOutOfRange { index: 4, bound: 4 })
    );
    assert!(x.get_mut(10).is_err());
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let (x, _) = test_vector_pair();
    let _v = x[4];
}

#[test]
fn test_add_sub() {
    let (x, y) = test_vector_pair();
    let s = x.try_add(&y).unwrap();
    assert_eq!(s.data(), &[4, 4, 0, 6]);
    assert_eq!(s.start_index(), 1);

    let d = x.try_sub(&y).unwrap();
    assert_eq!(d.data(), &[2, -4, 4, -4]);
}

#[test]
fn test_incompatible_vectors() {
    let (x, _) = test_vector_pair();
    let short = TriVector::from_vec(vec![1, 2, 3], 1);
    assert_eq!(
        x.try_add(&short),
        Err(TriuError::SizeMismatch { left: 4, right: 3 })
    );

    // same length, different columns
    let shifted = TriVector::from_vec(vec![1, 2, 3, 4], 0);
    assert!(x.try_sub(&shifted).is_err());
    assert!(x.dot(&shifted).is_err());
}

#[test]
fn test_dot() {
    let (x, y) = test_vector_pair();
    assert_eq!(x.dot(&y), Ok(3 + 0 - 4 + 5));
}

#[test]
fn test_translate() {
    let mut x = TriVector::from_vec(vec![3., 0., 2., 1.], 0);
    x.translate(-4.);
    assert_eq!(x.data(), &[-1., -4., -2., -3.]);
}

#[test]
fn test_scale() {
    let mut x = TriVector::from_vec(vec![3., 0., 2., 1.], 0);
    x.scale(3.);
    assert_eq!(x.data(), &[9., 0., 6., 3.]);
}

#[test]
fn test_set() {
    let mut x = TriVector::from_vec(vec![3, 0, 2, 1], 0);
    x.set(5);
    assert_eq!(x.data(), &[5, 5, 5, 5]);
}

#[test]
fn test_copy_from() {
    let (x, _) = test_vector_pair();
    let mut y = TriVector::new(2, 0);
    y.copy_from(&x);
    assert_eq!(x, y);
}

#[test]
fn test_display() {
    let (x, _) = test_vector_pair();
    assert_eq!(x.to_string(), "[ 3 0 2 1 ]");
}
