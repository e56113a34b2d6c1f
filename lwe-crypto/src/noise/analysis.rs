//! Exact distribution of the decryption noise.
//!
//! Decryption reconstructs `v' = ⌊q/2⌋·μ + rᵀ·e (mod q)`. Each term `rᵢ·eᵢ` is
//! zero with probability `1/2 + P(e = 0)/2` and equals `k ≠ 0` with probability
//! `P(e = k)/2`, so the sum over m samples is an m-fold convolution of that
//! single-term distribution.

use crate::errors::LWECryptoError;
use crate::keypair::params::{LweParams, decode_bit};
use crate::noise::ErrorDistribution;

/// Largest number of noise values (`2·m·bound + 1`) the analysis will tabulate.
pub const MAX_NOISE_SUPPORT: u64 = 1 << 22;

/// Distribution of `rᵀ·e` for one parameter set and error distribution.
#[derive(Debug, Clone)]
pub struct NoiseAnalysis {
    params: LweParams,
    /// Largest reachable `|rᵀ·e|`; `pmf[k + offset] = P(rᵀ·e = k)`.
    offset: i64,
    pmf: Vec<f64>,
}

impl NoiseAnalysis {
    /// Convolves the per-sample noise `m` times.
    ///
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidParameters` if the distribution reports a
    /// negative bound or `2·m·bound + 1` exceeds [`MAX_NOISE_SUPPORT`].
    pub fn new<D: ErrorDistribution>(
        params: &LweParams,
        error_distribution: &D,
    ) -> Result<Self, LWECryptoError> {
        let bound = error_distribution.bound();
        if bound < 0 {
            return Err(LWECryptoError::InvalidParameters(format!(
                "Error bound must be non-negative, got {}",
                bound
            )));
        }

        let support = (params.sample_count as u64)
            .checked_mul(bound as u64)
            .and_then(|worst| worst.checked_mul(2))
            .and_then(|width| width.checked_add(1))
            .filter(|&len| len <= MAX_NOISE_SUPPORT)
            .ok_or_else(|| {
                LWECryptoError::InvalidParameters(format!(
                    "Noise support for m={} and bound={} exceeds {} values",
                    params.sample_count, bound, MAX_NOISE_SUPPORT
                ))
            })?;
        let offset = (support / 2) as i64;

        let term: Vec<f64> = (-bound..=bound)
            .map(|k| {
                let selected = 0.5 * error_distribution.probability(k);
                if k == 0 { selected + 0.5 } else { selected }
            })
            .collect();

        let mut pmf = vec![1.0];
        for _ in 0..params.sample_count {
            let mut next = vec![0.0; pmf.len() + term.len() - 1];
            for (i, &p) in pmf.iter().enumerate() {
                if p == 0.0 {
                    continue;
                }
                for (j, &t) in term.iter().enumerate() {
                    next[i + j] += p * t;
                }
            }
            pmf = next;
        }

        Ok(Self {
            params: *params,
            offset,
            pmf,
        })
    }

    /// Largest `|rᵀ·e|` that can occur, `m · bound`.
    pub fn worst_case(&self) -> i64 {
        self.offset
    }

    /// `P(rᵀ·e = value)`.
    pub fn probability(&self, value: i64) -> f64 {
        if value.unsigned_abs() > self.offset as u64 {
            return 0.0;
        }
        self.pmf[(value + self.offset) as usize]
    }

    /// Variance of `rᵀ·e`. The distribution is symmetric, so the mean is 0.
    pub fn variance(&self) -> f64 {
        self.support()
            .map(|(k, p)| p * (k as f64) * (k as f64))
            .sum()
    }

    /// Probability that an encryption of `mu` decrypts to the other bit.
    pub fn failure_probability_for(&self, mu: u8) -> f64 {
        let ring = &self.params.ring;
        let encoded = ring.half() * mu as i64;

        self.support()
            .filter(|&(k, _)| decode_bit(ring.add(encoded, k), ring) != mu)
            .map(|(_, p)| p)
            .sum()
    }

    /// Worst of the two per-bit failure probabilities.
    pub fn failure_probability(&self) -> f64 {
        self.failure_probability_for(0)
            .max(self.failure_probability_for(1))
    }

    /// True if no reachable noise value can flip either bit.
    pub fn is_always_correct(&self) -> bool {
        let ring = &self.params.ring;
        self.support().all(|(k, _)| {
            [0u8, 1].iter().all(|&mu| {
                let encoded = ring.half() * mu as i64;
                decode_bit(ring.add(encoded, k), ring) == mu
            })
        })
    }

    fn support(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.pmf
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > 0.0)
            .map(move |(i, &p)| (i as i64 - self.offset, p))
    }
}
