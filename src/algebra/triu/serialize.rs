use crate::algebra::{ScalarT, TriuError, TriuMatrix};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Serialized form of a triangular matrix.  Row data is packed as in
// memory, and is validated against `n` when deserializing.

#[derive(Serialize, Deserialize)]
struct TriuMatrixData<T> {
    n: usize,
    rows: Vec<Vec<T>>,
}

impl<T> TriuMatrixData<T>
where
    T: ScalarT,
{
    fn into_matrix(self) -> Result<TriuMatrix<T>, TriuError> {
        if self.n != self.rows.len() {
            return Err(TriuError::SizeMismatch {
                left: self.n,
                right: self.rows.len(),
            });
        }
        TriuMatrix::from_rows(self.rows)
    }
}

impl<T> Serialize for TriuMatrix<T>
where
    T: ScalarT + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = TriuMatrixData {
            n: self.n,
            rows: self.rows.iter().map(|row| row.data().to_vec()).collect(),
        };
        data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TriuMatrix<T>
where
    T: ScalarT + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = TriuMatrixData::<T>::deserialize(deserializer)?;
        data.into_matrix().map_err(serde::de::Error::custom)
    }
}
