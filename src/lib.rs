//!  __utmatrix__ is a Rust implementation of a generic square upper triangular
//! matrix container.  An `n × n` matrix
//!
//! ```text
//! A = [a00  a01  ...  a0,n-1  ]
//!     [ ⋅   a11  ...  a1,n-1  ]
//!     [ ⋅    ⋅   ...   ...    ]
//!     [ ⋅    ⋅    ⋅   an-1,n-1]
//! ```
//!
//! stores only the entries on or above the main diagonal, with row `r`
//! holding `n - r` elements.  Matrices have value semantics, bounds-checked
//! element access, and elementwise addition and subtraction.
//!
//! ```
//! use utmatrix::algebra::*;
//!
//! let mut m = TriuMatrix::<i32>::new(7).unwrap();
//! m[1][1] = 5;
//! m[2][3] = 1;
//!
//! let mut n = TriuMatrix::<i32>::new(7).unwrap();
//! n[1][1] = 5;
//! n[2][3] = 4;
//! n[3][1] = 1;
//!
//! let s = m.try_add(&n).unwrap();
//! assert_eq!(s[1][1], 10);
//! assert_eq!(s[2][3], 5);
//! assert_eq!(s[3][1], 1);
//!
//! // dimension mismatches are reported, never silently ignored
//! let p = TriuMatrix::<i32>::new(5).unwrap();
//! assert!(matches!(
//!     m.try_sub(&p),
//!     Err(TriuError::SizeMismatch { left: 7, right: 5 })
//! ));
//! ```
//!
//! __Element addressing.__  `m[r][c]` is the `c`-th *stored* element of row
//! `r`, i.e. the entry in absolute column `r + c`.  Use
//! [`TriuMatrix::entry`](crate::algebra::TriuMatrix::entry) to read by
//! absolute column.
//!
//! __Features.__  The default `serde` feature derives serialization for
//! matrices and settings.

pub mod algebra;
pub mod io;
pub mod settings;
