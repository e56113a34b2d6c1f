//! Fixed-shape integer matrix stored in row-major order.

use crate::errors::LWECryptoError;
use crate::ring::Vector;

use serde::{Deserialize, Serialize};

/// A `rows × cols` integer matrix.
///
/// The shape is fixed at construction, so every row is guaranteed to have
/// exactly `cols` entries. Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

/// Unchecked wire shape of [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = LWECryptoError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.data.len()) {
            return Err(LWECryptoError::DimensionMismatch(format!(
                "Matrix declared as {}×{} but carries {} entries",
                raw.rows,
                raw.cols,
                raw.data.len()
            )));
        }

        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

impl Matrix {
    /// Creates a `rows × cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Builds a matrix by calling `entry(i, j)` for every position, row by row.
    pub fn from_fn(rows: usize, cols: usize, mut entry: impl FnMut(usize, usize) -> i64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(entry(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::DimensionMismatch` if the rows have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Matrix;
    /// let a = Matrix::try_from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    /// assert_eq!(a.shape(), (3, 2));
    /// assert_eq!(a.row(1), &[3, 4]);
    /// assert!(Matrix::try_from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn try_from_rows(rows: Vec<Vector>) -> Result<Self, LWECryptoError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LWECryptoError::DimensionMismatch(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns the entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.row(i)[j]
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        // not chunks_exact: it panics on zero-column matrices
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Iterates over every entry in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = &i64> {
        self.data.iter()
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vector> {
        self.iter_rows().map(<[i64]>::to_vec).collect()
    }
}
