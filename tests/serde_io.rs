#![cfg(feature = "serde")]

use utmatrix::{algebra::*, settings::*};

#[test]
fn test_matrix_json_roundtrip() {
    let m = TriuMatrix::from_rows(vec![vec![1.5, -2., 3.], vec![4., 0.25], vec![6.]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"n":3,"rows":[[1.5,-2.0,3.0],[4.0,0.25],[6.0]]}"#);

    let m2: TriuMatrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(m, m2);
    assert!(m2.is_consistent());
}

#[test]
fn test_matrix_json_rejects_bad_rows() {
    // second row too long
    let json = r#"{"n":2,"rows":[[1,2],[3,4]]}"#;
    assert!(serde_json::from_str::<TriuMatrix<i32>>(json).is_err());

    // dimension field disagrees with row count
    let json = r#"{"n":3,"rows":[[1,2],[3]]}"#;
    assert!(serde_json::from_str::<TriuMatrix<i32>>(json).is_err());

    // empty
    let json = r#"{"n":0,"rows":[]}"#;
    assert!(serde_json::from_str::<TriuMatrix<i32>>(json).is_err());
}

#[test]
fn test_settings_json_defaults() {
    let settings: MatrixSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, MatrixSettings::default());

    let settings: MatrixSettings = serde_json::from_str(r#"{"max_size":0}"#).unwrap();
    assert!(settings.validate().is_err());
}
