//! Uniform and error samplers over Z_q.

use crate::noise::ErrorDistribution;
use crate::ring::{Matrix, Ring, Vector};

use rand::{CryptoRng, Rng};

/// Samples `len` values uniformly from `[0, q)`.
pub fn sample_uniform_vector<R: Rng + CryptoRng>(len: usize, ring: &Ring, rng: &mut R) -> Vector {
    let q = ring.modulus() as i64;
    (0..len).map(|_| rng.random_range(0..q)).collect()
}

/// Samples a `rows × cols` matrix with entries uniform in `[0, q)`, row by row.
pub fn sample_uniform_matrix<R: Rng + CryptoRng>(
    rows: usize,
    cols: usize,
    ring: &Ring,
    rng: &mut R,
) -> Matrix {
    let q = ring.modulus() as i64;
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(0..q))
}

/// Samples `len` independent uniform bits.
pub fn sample_binary_vector<R: Rng + CryptoRng>(len: usize, rng: &mut R) -> Vector {
    (0..len).map(|_| rng.random_range(0..=1)).collect()
}

/// Samples `len` signed error values from `dist`. The values are not reduced mod q.
pub fn sample_error_vector<D: ErrorDistribution, R: Rng + CryptoRng>(
    len: usize,
    dist: &D,
    rng: &mut R,
) -> Vector {
    (0..len).map(|_| dist.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LWECryptoError;
    use crate::noise::Ternary;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_uniform_range() -> Result<(), LWECryptoError> {
        let mut rng = StdRng::seed_from_u64(42);
        let ring = Ring::try_with(97)?;
        let samples = sample_uniform_vector(1000, &ring, &mut rng);
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|&s| ring.contains(s)));

        // With 1000 draws from 97 values both ends of the range should appear.
        assert!(samples.contains(&0));
        assert!(samples.contains(&96));
        Ok(())
    }

    #[test]
    fn test_uniform_matrix_shape() -> Result<(), LWECryptoError> {
        let mut rng = StdRng::seed_from_u64(1);
        let ring = Ring::try_with(11)?;
        let a = sample_uniform_matrix(4, 3, &ring, &mut rng);
        assert_eq!(a.shape(), (4, 3));
        assert!(a.entries().all(|&x| ring.contains(x)));
        Ok(())
    }

    #[test]
    fn test_binary_vector() {
        let mut rng = StdRng::seed_from_u64(3);
        let r = sample_binary_vector(500, &mut rng);
        assert!(r.iter().all(|&x| x == 0 || x == 1));
        let ones = r.iter().filter(|&&x| x == 1).count();
        assert!((200..300).contains(&ones), "ones={ones}");
    }

    #[test]
    fn test_error_vector_is_signed() {
        let mut rng = StdRng::seed_from_u64(5);
        let e = sample_error_vector(300, &Ternary, &mut rng);
        assert!(e.iter().all(|x| x.abs() <= 1));
        assert!(e.contains(&-1));
    }
}
