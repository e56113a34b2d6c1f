use crate::errors::LWECryptoError;
use crate::keypair::ciphertext::Ciphertext;
use crate::keypair::params::decode_bit;
use crate::ring::matrix_ops::{inner_product, matrix_vector_mul, normalize_vector, vector_add};
use crate::ring::{Matrix, Ring, Vector};

use serde::{Deserialize, Serialize};

/// The public half of an LWE key pair: `(A, b)` with `b = A·s + e (mod q)`.
///
/// Immutable once built, so the relation between `A` and `b` cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPublicKey")]
pub struct PublicKey {
    matrix_A: Matrix,
    vector_b: Vector,
}

#[derive(Deserialize)]
struct RawPublicKey {
    matrix_A: Matrix,
    vector_b: Vector,
}

impl TryFrom<RawPublicKey> for PublicKey {
    type Error = LWECryptoError;

    fn try_from(raw: RawPublicKey) -> Result<Self, Self::Error> {
        if raw.vector_b.len() != raw.matrix_A.rows() {
            return Err(LWECryptoError::DimensionMismatch(format!(
                "Public key vector b has length {} but A has {} rows",
                raw.vector_b.len(),
                raw.matrix_A.rows()
            )));
        }

        Ok(Self {
            matrix_A: raw.matrix_A,
            vector_b: raw.vector_b,
        })
    }
}

/// The secret vector `s ∈ Z_q^n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey {
    vector_s: Vector,
}

impl PublicKey {
    /// Builds `(A, b)` with `b = A·s + e (mod q)` from explicit parts.
    ///
    /// `e` is given in signed form, e.g. `[-1, 0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::DimensionMismatch` if `s` does not match the columns of `A`
    /// or `e` does not match its rows.
    pub fn from_parts(
        matrix_A: Matrix,
        vector_s: &[i64],
        vector_e: &[i64],
        ring: &Ring,
    ) -> Result<Self, LWECryptoError> {
        if vector_e.len() != matrix_A.rows() {
            return Err(LWECryptoError::DimensionMismatch(format!(
                "Error vector length ({}) must match matrix rows ({})",
                vector_e.len(),
                matrix_A.rows()
            )));
        }

        let matrix_A = Matrix::from_fn(matrix_A.rows(), matrix_A.cols(), |i, j| {
            ring.normalize(matrix_A.get(i, j))
        });

        let a_s = matrix_vector_mul(&matrix_A, vector_s, ring)?;
        let vector_b = vector_add(&a_s, vector_e, ring)?;

        Ok(Self { matrix_A, vector_b })
    }

    pub fn matrix_A(&self) -> &Matrix {
        &self.matrix_A
    }

    pub fn vector_b(&self) -> &[i64] {
        &self.vector_b
    }

    /// Dimension n, the number of columns of `A`.
    pub fn dimension(&self) -> usize {
        self.matrix_A.cols()
    }

    /// Sample count m, the number of rows of `A`.
    pub fn sample_count(&self) -> usize {
        self.matrix_A.rows()
    }
}

impl SecretKey {
    /// Wraps `s`, reducing every entry into `[0, q)`.
    pub fn from_vector(vector_s: Vector, ring: &Ring) -> Self {
        Self {
            vector_s: normalize_vector(&vector_s, ring),
        }
    }

    pub fn vector_s(&self) -> &[i64] {
        &self.vector_s
    }

    pub fn dimension(&self) -> usize {
        self.vector_s.len()
    }

    /// Decrypts a single bit.
    ///
    /// Computes `v' = v − ⟨u, s⟩ (mod q) = ⌊q/2⌋·μ + rᵀ·e` and applies the
    /// `q/4`, `3q/4` decision rule. When `|rᵀ·e|` reaches `q/4` the wrong bit is
    /// returned without any error.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::DimensionMismatch` if `u` and `s` have different lengths.
    pub fn decrypt(&self, ciphertext: &Ciphertext, ring: &Ring) -> Result<u8, LWECryptoError> {
        // 1. ⟨u, s⟩ recovers rᵀ·A·s
        let inner = inner_product(&ciphertext.u, &self.vector_s, ring)?;

        // 2. Cancel rᵀ·b, leaving the encoded bit plus accumulated noise
        let v_prime = ring.sub(ciphertext.v, inner);

        Ok(decode_bit(v_prime, ring))
    }
}
