//! # Noise Module
//!
//! Sampling for the LWE scheme and analysis of the noise it accumulates.
//!
//! - Secrets, matrices: uniform in Z_q
//! - Errors: any [`ErrorDistribution`], ternary {-1, 0, 1} by default
//! - Encryption selectors: uniform in {0, 1}
//!
//! [`NoiseAnalysis`] computes the exact distribution of the decryption noise
//! `rᵀ·e`, which turns the probability of a wrong decryption into a number
//! that can be checked for a given parameter set.

pub mod analysis;
pub mod distribution;
pub mod sampling;

pub use analysis::{MAX_NOISE_SUPPORT, NoiseAnalysis};
pub use distribution::{
    CenteredBinomial, ErrorDistribution, MAX_UNIFORM_BOUND, Ternary, UniformBounded,
};
