use crate::errors::LWECryptoError;
use crate::keypair::ciphertext::Ciphertext;
use crate::keypair::keys::{PublicKey, SecretKey};
use crate::noise::sampling::{
    sample_binary_vector, sample_error_vector, sample_uniform_matrix, sample_uniform_vector,
};
use crate::noise::{ErrorDistribution, Ternary};
use crate::ring::matrix_ops::{inner_product, vector_matrix_mul};
use crate::ring::Ring;

use rand::{CryptoRng, Rng};

use serde::{Deserialize, Serialize};

/// Smallest modulus for which the `q/4` and `3q/4` decision thresholds separate
/// the two encodings. Below it `⌊q/2⌋` collapses onto the zero region.
pub const MIN_MODULUS: u64 = 4;

/// Parameters shared by key generation and encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweParams {
    /// Dimension n of the secret vector, also the number of columns of A.
    pub dimension: usize,
    /// Number m of LWE samples, the number of rows of A.
    pub sample_count: usize,
    /// The ring Z_q all arithmetic happens in.
    pub ring: Ring,
}

impl LweParams {
    /// Creates a new parameter set for dimension `n`, `m` samples and modulus `q`.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidParameters` if `n` or `m` is 0 and
    /// `LWECryptoError::InvalidModulus` if `q < 4`.
    pub fn try_with(n: usize, m: usize, q: u64) -> Result<Self, LWECryptoError> {
        if n == 0 {
            return Err(LWECryptoError::InvalidParameters(
                "Dimension n must be > 0".to_string(),
            ));
        }

        if m == 0 {
            return Err(LWECryptoError::InvalidParameters(
                "Number of samples m must be > 0".to_string(),
            ));
        }

        let ring = Self::ring_for(q)?;

        if m <= n {
            log::warn!(
                "Sample count m={} does not exceed dimension n={}, the public key carries no redundancy",
                m,
                n
            );
        }

        Ok(Self {
            dimension: n,
            sample_count: m,
            ring,
        })
    }

    /// Toy parameters used by the demo: n=10, m=30, q=97.
    pub fn toy() -> Self {
        Self {
            dimension: 10,
            sample_count: 30,
            ring: Ring { modulus: 97 },
        }
    }

    /// Builds the ring Z_q for a cryptosystem modulus.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidModulus` if `q < 4` or `q` does not fit into `i64`.
    pub fn ring_for(q: u64) -> Result<Ring, LWECryptoError> {
        if q < MIN_MODULUS {
            return Err(LWECryptoError::InvalidModulus(format!(
                "Modulus must be at least {} for the decision thresholds to be meaningful, got {}",
                MIN_MODULUS, q
            )));
        }

        Ring::try_with(q)
    }

    /// Recovers the parameter set a public key was generated with.
    pub fn for_public_key(public_key: &PublicKey, q: u64) -> Result<Self, LWECryptoError> {
        let params = Self::try_with(public_key.dimension(), public_key.sample_count(), q)?;
        params.check_public_key(public_key)?;
        Ok(params)
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    /// Generates a key pair with ternary noise.
    pub fn keygen<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretKey), LWECryptoError> {
        self.keygen_with(&Ternary, rng)
    }

    /// Generates a key pair drawing the error vector from `error_distribution`.
    ///
    /// Draw order: `s` (n values), `A` (m×n values, row by row), then `e` (m values).
    pub fn keygen_with<D: ErrorDistribution, R: Rng + CryptoRng>(
        &self,
        error_distribution: &D,
        rng: &mut R,
    ) -> Result<(PublicKey, SecretKey), LWECryptoError> {
        let n = self.dimension;
        let m = self.sample_count;

        let worst_case = m as i128 * error_distribution.bound() as i128;
        if 4 * worst_case >= self.modulus() as i128 {
            log::warn!(
                "Worst-case noise {} reaches q/4 for q={}, decryption may fail",
                worst_case,
                self.modulus()
            );
        }

        // 1. Secret key in Z_q^n
        let vector_s = sample_uniform_vector(n, &self.ring, rng);

        // 2. Uniform m×n matrix A
        let matrix_A = sample_uniform_matrix(m, n, &self.ring, rng);

        // 3. Small error vector e
        let vector_e = sample_error_vector(m, error_distribution, rng);

        // 4. b = A·s + e (mod q)
        let public_key = PublicKey::from_parts(matrix_A, &vector_s, &vector_e, &self.ring)?;
        let secret_key = SecretKey::from_vector(vector_s, &self.ring);

        log::debug!("Generated LWE key pair: n={}, m={}, q={}", n, m, self.modulus());

        Ok((public_key, secret_key))
    }

    /// Encrypts the bit `mu` with a fresh random selection vector.
    pub fn encrypt<R: Rng + CryptoRng>(
        &self,
        public_key: &PublicKey,
        mu: u8,
        rng: &mut R,
    ) -> Result<Ciphertext, LWECryptoError> {
        self.check_public_key(public_key)?;
        let offset = self.encode(mu)?;

        let selection = sample_binary_vector(self.sample_count, rng);
        let ciphertext = self.combine(public_key, offset, &selection)?;

        log::trace!("Encrypted bit {} into v={}", mu, ciphertext.v);

        Ok(ciphertext)
    }

    /// Encrypts `mu` using the given selection vector `r ∈ {0,1}^m`.
    ///
    /// Computes `u = rᵀ·A` and `v = rᵀ·b + ⌊q/2⌋·mu`, both mod q.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidSelection` if `r` has an entry outside {0, 1} and
    /// `LWECryptoError::DimensionMismatch` if `r` does not have length m.
    pub fn encrypt_with_selection(
        &self,
        public_key: &PublicKey,
        mu: u8,
        selection: &[i64],
    ) -> Result<Ciphertext, LWECryptoError> {
        self.check_public_key(public_key)?;
        let offset = self.encode(mu)?;

        if let Some(bad) = selection.iter().find(|&&x| x != 0 && x != 1) {
            return Err(LWECryptoError::InvalidSelection(format!(
                "Selection entries must be 0 or 1, got {}",
                bad
            )));
        }

        self.combine(public_key, offset, selection)
    }

    /// Maps a reconstructed value `v' ∈ Z_q` back to a bit.
    pub fn decode(&self, v_prime: i64) -> u8 {
        decode_bit(v_prime, &self.ring)
    }

    /// Returns the additive encoding `⌊q/2⌋·mu`.
    pub fn encode(&self, mu: u8) -> Result<i64, LWECryptoError> {
        if mu > 1 {
            return Err(LWECryptoError::InvalidMessage(mu as u64));
        }

        Ok(self.ring.half() * mu as i64)
    }

    /// Checks that `public_key` has the shape these parameters describe.
    pub fn check_public_key(&self, public_key: &PublicKey) -> Result<(), LWECryptoError> {
        let (rows, cols) = public_key.matrix_A().shape();
        if rows != self.sample_count || cols != self.dimension {
            return Err(LWECryptoError::DimensionMismatch(format!(
                "Public key matrix is {}×{} but parameters expect {}×{}",
                rows, cols, self.sample_count, self.dimension
            )));
        }

        if public_key.vector_b().len() != rows {
            return Err(LWECryptoError::DimensionMismatch(format!(
                "Public key vector b has length {} but A has {} rows",
                public_key.vector_b().len(),
                rows
            )));
        }

        Ok(())
    }

    fn combine(
        &self,
        public_key: &PublicKey,
        offset: i64,
        selection: &[i64],
    ) -> Result<Ciphertext, LWECryptoError> {
        let ring = &self.ring;

        let u = vector_matrix_mul(selection, public_key.matrix_A(), ring)?;
        let selected_b = inner_product(selection, public_key.vector_b(), ring)?;
        let v = ring.add(selected_b, offset);

        Ok(Ciphertext { u, v })
    }
}

/// The decision rule: `v' < q/4` or `v' > 3q/4` decodes to 0, anything else to 1.
///
/// Evaluated in integers as `4·v' < q` or `4·v' > 3q`, so no rounding is involved.
pub fn decode_bit(v_prime: i64, ring: &Ring) -> u8 {
    let q = ring.modulus() as i128;
    let scaled = 4 * ring.normalize(v_prime) as i128;

    if scaled < q || scaled > 3 * q { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        assert!(LweParams::try_with(10, 30, 97).is_ok());
        assert!(LweParams::try_with(2, 4, 4).is_ok());
        assert!(matches!(
            LweParams::try_with(0, 30, 97),
            Err(LWECryptoError::InvalidParameters(_))
        ));
        assert!(matches!(
            LweParams::try_with(10, 0, 97),
            Err(LWECryptoError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_degenerate_moduli_are_rejected() {
        // q = 2 puts q/4 at 0.5 and ⌊q/2⌋ = 1 inside the zero region.
        for q in [0, 1, 2, 3] {
            assert!(matches!(
                LweParams::try_with(10, 30, q),
                Err(LWECryptoError::InvalidModulus(_))
            ));
        }
    }

    #[test]
    fn test_toy_matches_validated_params() -> Result<(), LWECryptoError> {
        assert_eq!(LweParams::toy(), LweParams::try_with(10, 30, 97)?);
        Ok(())
    }

    #[test]
    fn test_decode_thresholds_q97() -> Result<(), LWECryptoError> {
        let params = LweParams::try_with(10, 30, 97)?;
        // q/4 = 24.25, 3q/4 = 72.75
        assert_eq!(params.decode(0), 0);
        assert_eq!(params.decode(24), 0);
        assert_eq!(params.decode(25), 1);
        assert_eq!(params.decode(48), 1);
        assert_eq!(params.decode(72), 1);
        assert_eq!(params.decode(73), 0);
        assert_eq!(params.decode(96), 0);
        Ok(())
    }

    #[test]
    fn test_decode_thresholds_are_exclusive() -> Result<(), LWECryptoError> {
        // q = 8: q/4 = 2 and 3q/4 = 6 sit exactly on integers.
        let params = LweParams::try_with(1, 2, 8)?;
        assert_eq!(params.decode(1), 0);
        assert_eq!(params.decode(2), 1);
        assert_eq!(params.decode(6), 1);
        assert_eq!(params.decode(7), 0);
        Ok(())
    }

    #[test]
    fn test_decode_smallest_modulus() -> Result<(), LWECryptoError> {
        let params = LweParams::try_with(1, 2, 4)?;
        assert_eq!(params.decode(0), 0);
        assert_eq!(params.decode(params.encode(1)?), 1);
        assert_eq!(params.decode(params.encode(0)?), 0);
        Ok(())
    }

    #[test]
    fn test_encode_rejects_non_bits() -> Result<(), LWECryptoError> {
        let params = LweParams::toy();
        assert_eq!(params.encode(0)?, 0);
        assert_eq!(params.encode(1)?, 48);
        assert_eq!(params.encode(2), Err(LWECryptoError::InvalidMessage(2)));
        Ok(())
    }
}
