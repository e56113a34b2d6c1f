use crate::errors::LWECryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// Inner product `⟨x, y⟩ mod q` of two equal-length vectors.
///
/// Every multiply-accumulate step is reduced immediately.
///
/// # Errors
///
/// Returns `LWECryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn inner_product(x: &[i64], y: &[i64], ring: &Ring) -> Result<i64, LWECryptoError> {
    if x.len() != y.len() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Vector lengths must match for inner product ({} vs {})",
            x.len(),
            y.len()
        )));
    }

    Ok(x
        .iter()
        .zip(y.iter())
        .fold(0i64, |acc, (&a, &b)| ring.add(acc, ring.mul(a, b))))
}

/// A·x where A is an m×n matrix and x is a length-n vector.
/// Returns an m-vector.
pub fn matrix_vector_mul(a: &Matrix, x: &[i64], ring: &Ring) -> Result<Vector, LWECryptoError> {
    if x.len() != a.cols() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            a.cols(),
            x.len()
        )));
    }

    a.iter_rows().map(|row| inner_product(row, x, ring)).collect()
}

/// x·A where x is a length-m row-vector and A is m×n.
/// Returns a length-n row-vector.
pub fn vector_matrix_mul(x: &[i64], a: &Matrix, ring: &Ring) -> Result<Vector, LWECryptoError> {
    if a.rows() != x.len() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            x.len(),
            a.rows()
        )));
    }

    let mut y = vec![0i64; a.cols()];
    for (&coeff, row) in x.iter().zip(a.iter_rows()) {
        for (acc, &val) in y.iter_mut().zip(row) {
            *acc = ring.add(*acc, ring.mul(coeff, val));
        }
    }
    Ok(y)
}

/// Computes the vector sum `c = a + b` modulo `q`, where `q` is the modulus of the ring.
///
/// # Errors
///
/// Returns `LWECryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_add(a: &[i64], b: &[i64], ring: &Ring) -> Result<Vector, LWECryptoError> {
    if a.len() != b.len() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }

    Ok(a.iter().zip(b).map(|(&x, &y)| ring.add(x, y)).collect())
}

/// Computes the vector difference `c = a - b` modulo `q`, where `q` is the modulus of the ring.
///
/// # Errors
///
/// Returns `LWECryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_sub(a: &[i64], b: &[i64], ring: &Ring) -> Result<Vector, LWECryptoError> {
    if a.len() != b.len() {
        return Err(LWECryptoError::DimensionMismatch(format!(
            "Vector lengths must match for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }

    Ok(a.iter().zip(b).map(|(&x, &y)| ring.sub(x, y)).collect())
}

/// Reduces every entry of `v` into `[0, q)`.
pub fn normalize_vector(v: &[i64], ring: &Ring) -> Vector {
    v.iter().map(|&val| ring.normalize(val)).collect()
}
