//! Configuration for matrix construction.

use crate::algebra::MAX_MATRIX_SIZE;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings applied when constructing a [`TriuMatrix`](crate::algebra::TriuMatrix)
/// with [`new_with_settings`](crate::algebra::TriuMatrix::new_with_settings).
///
/// ```
/// use utmatrix::algebra::TriuMatrix;
/// use utmatrix::settings::MatrixSettingsBuilder;
///
/// let settings = MatrixSettingsBuilder::default()
///     .max_size(100)
///     .build()
///     .unwrap();
///
/// assert!(TriuMatrix::<i32>::new_with_settings(100, &settings).is_ok());
/// assert!(TriuMatrix::<i32>::new_with_settings(101, &settings).is_err());
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixSettings {
    ///maximum permitted matrix dimension
    #[builder(default = "MAX_MATRIX_SIZE")]
    pub max_size: usize,
}

impl Default for MatrixSettings {
    fn default() -> MatrixSettings {
        MatrixSettingsBuilder::default().build().unwrap()
    }
}

impl MatrixSettings {
    /// Checks that the settings are valid.  Needed for settings
    /// produced without the builder, e.g. by deserialization.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_max_size(self.max_size)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for MatrixSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        MatrixSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl MatrixSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(max_size) = self.max_size {
            validate_max_size(max_size)?;
        }
        Ok(())
    }
}

fn validate_max_size(max_size: usize) -> Result<(), SettingsError> {
    if max_size == 0 || max_size > MAX_MATRIX_SIZE {
        return Err(SettingsError::BadFieldValue("max_size"));
    }
    Ok(())
}

#[test]
fn test_settings_validate() {
    let settings = MatrixSettings::default();
    assert_eq!(settings.max_size, MAX_MATRIX_SIZE);
    assert!(settings.validate().is_ok());

    let settings = MatrixSettings { max_size: 0 };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("max_size"))
    );
}
