//! Error distributions used for the `e` term of the public key.

use crate::errors::LWECryptoError;

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

/// A symmetric distribution over small integers.
///
/// `probability` must describe exactly what `sample` draws from, since
/// [`NoiseAnalysis`](crate::noise::NoiseAnalysis) relies on it to bound the
/// decryption failure rate.
pub trait ErrorDistribution {
    /// Draws one error value in `[-bound, bound]`.
    fn sample<R: Rng + CryptoRng>(&self, rng: &mut R) -> i64;

    /// Largest magnitude `sample` can return.
    fn bound(&self) -> i64;

    /// Probability of drawing exactly `value`.
    fn probability(&self, value: i64) -> f64;
}

/// Uniform over {-1, 0, 1}.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ternary;

impl ErrorDistribution for Ternary {
    fn sample<R: Rng + CryptoRng>(&self, rng: &mut R) -> i64 {
        rng.random_range(-1..=1)
    }

    fn bound(&self) -> i64 {
        1
    }

    fn probability(&self, value: i64) -> f64 {
        if value.unsigned_abs() <= 1 { 1.0 / 3.0 } else { 0.0 }
    }
}

/// Centered binomial distribution CBD(eta): the difference of two sums of
/// `eta` fair coins. Support is `[-eta, eta]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenteredBinomial {
    eta: u32,
}

impl CenteredBinomial {
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidParameters` if `eta` is 0 or larger than 30.
    pub fn try_with(eta: u32) -> Result<Self, LWECryptoError> {
        if eta == 0 || eta > 30 {
            return Err(LWECryptoError::InvalidParameters(format!(
                "CBD eta must be in 1..=30, got {}",
                eta
            )));
        }

        Ok(Self { eta })
    }

    pub fn eta(&self) -> u32 {
        self.eta
    }
}

impl ErrorDistribution for CenteredBinomial {
    fn sample<R: Rng + CryptoRng>(&self, rng: &mut R) -> i64 {
        let mut a = 0i64;
        let mut b = 0i64;
        for _ in 0..self.eta {
            a += rng.random_range(0..=1i64);
            b += rng.random_range(0..=1i64);
        }
        a - b
    }

    fn bound(&self) -> i64 {
        self.eta as i64
    }

    fn probability(&self, value: i64) -> f64 {
        let eta = self.eta as i64;
        if value.unsigned_abs() > eta as u64 {
            return 0.0;
        }

        // P(a - b = k) = C(2η, η + k) / 4^η
        let n = 2 * eta as u32;
        binomial(n, (eta + value) as u32) / 4f64.powi(eta as i32)
    }
}

/// Largest bound accepted by [`UniformBounded`].
pub const MAX_UNIFORM_BOUND: i64 = 1 << 16;

/// Uniform over `[-bound, bound]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformBounded {
    bound: i64,
}

impl UniformBounded {
    /// # Errors
    ///
    /// Returns `LWECryptoError::InvalidParameters` if `bound` is negative or
    /// larger than [`MAX_UNIFORM_BOUND`].
    pub fn try_with(bound: i64) -> Result<Self, LWECryptoError> {
        if !(0..=MAX_UNIFORM_BOUND).contains(&bound) {
            return Err(LWECryptoError::InvalidParameters(format!(
                "Error bound must be in 0..={}, got {}",
                MAX_UNIFORM_BOUND, bound
            )));
        }

        Ok(Self { bound })
    }
}

impl ErrorDistribution for UniformBounded {
    fn sample<R: Rng + CryptoRng>(&self, rng: &mut R) -> i64 {
        rng.random_range(-self.bound..=self.bound)
    }

    fn bound(&self) -> i64 {
        self.bound
    }

    fn probability(&self, value: i64) -> f64 {
        if value.unsigned_abs() <= self.bound as u64 {
            1.0 / (2 * self.bound + 1) as f64
        } else {
            0.0
        }
    }
}

fn binomial(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn total_mass<D: ErrorDistribution>(dist: &D) -> f64 {
        (-dist.bound()..=dist.bound())
            .map(|v| dist.probability(v))
            .sum()
    }

    #[test]
    fn test_ternary_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10000;
        let samples: Vec<i64> = (0..n).map(|_| Ternary.sample(&mut rng)).collect();

        // Each value should show up roughly n/3 times
        let expected = n / 3;
        let tolerance = (n as f64 * 0.05) as usize;
        for value in -1..=1 {
            let count = samples.iter().filter(|&&x| x == value).count();
            assert!(
                (count as isize - expected as isize).unsigned_abs() < tolerance,
                "value {value}: count={count}, expected≈{expected}"
            );
        }

        assert!(samples.iter().all(|x| x.abs() <= 1));
    }

    #[test]
    fn test_probabilities_sum_to_one() -> Result<(), LWECryptoError> {
        assert!((total_mass(&Ternary) - 1.0).abs() < 1e-12);
        for eta in [1, 2, 3, 8] {
            assert!((total_mass(&CenteredBinomial::try_with(eta)?) - 1.0).abs() < 1e-12);
        }
        for bound in [0, 1, 5] {
            assert!((total_mass(&UniformBounded::try_with(bound)?) - 1.0).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_cbd_probabilities() -> Result<(), LWECryptoError> {
        let cbd = CenteredBinomial::try_with(2)?;
        // C(4, k) / 16 for k = 0..=4
        assert!((cbd.probability(0) - 6.0 / 16.0).abs() < 1e-12);
        assert!((cbd.probability(1) - 4.0 / 16.0).abs() < 1e-12);
        assert!((cbd.probability(-2) - 1.0 / 16.0).abs() < 1e-12);
        assert_eq!(cbd.probability(3), 0.0);
        Ok(())
    }

    #[test]
    fn test_samples_stay_within_bound() -> Result<(), LWECryptoError> {
        let mut rng = StdRng::seed_from_u64(7);
        let cbd = CenteredBinomial::try_with(3)?;
        let uniform = UniformBounded::try_with(4)?;
        for _ in 0..1000 {
            assert!(cbd.sample(&mut rng).abs() <= cbd.bound());
            assert!(uniform.sample(&mut rng).abs() <= uniform.bound());
        }
        Ok(())
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(CenteredBinomial::try_with(0).is_err());
        assert!(CenteredBinomial::try_with(31).is_err());
        assert!(UniformBounded::try_with(-1).is_err());
        assert!(UniformBounded::try_with(MAX_UNIFORM_BOUND + 1).is_err());
        assert!(UniformBounded::try_with(i64::MAX).is_err());
    }

    #[test]
    fn test_largest_uniform_bound() -> Result<(), LWECryptoError> {
        let uniform = UniformBounded::try_with(MAX_UNIFORM_BOUND)?;
        let expected = 1.0 / (2 * MAX_UNIFORM_BOUND + 1) as f64;
        assert_eq!(uniform.probability(0), expected);
        assert_eq!(uniform.probability(-MAX_UNIFORM_BOUND), expected);
        assert_eq!(uniform.probability(i64::MAX), 0.0);
        assert_eq!(uniform.probability(i64::MIN), 0.0);
        assert_eq!(Ternary.probability(i64::MIN), 0.0);
        assert_eq!(CenteredBinomial::try_with(30)?.probability(i64::MIN), 0.0);
        Ok(())
    }
}
