//! # LWE Crypto
//!
//! A toy public-key cryptosystem based on Learning With Errors. A key holder
//! samples a secret `s`, publishes `(A, b = A·s + e)`, and anyone holding the
//! public key can encrypt a single bit as `(u, v) = (rᵀA, rᵀb + ⌊q/2⌋·μ)`.
//!
//! The parameters are illustrative only. There is no constant-time arithmetic
//! and no attempt at real security margins.
//!
//! ```
//! # use lwe_crypto::errors::LWECryptoError;
//! # fn main() -> Result<(), LWECryptoError> {
//! let mut rng = rand::rng();
//! let (public_key, secret_key) = lwe_crypto::keygen(10, 30, 97, &mut rng)?;
//!
//! let ciphertext = lwe_crypto::encrypt(&public_key, 1, 97, &mut rng)?;
//! let bit = lwe_crypto::decrypt(&ciphertext, &secret_key, 97)?;
//! assert!(bit == 0 || bit == 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod keypair;
pub mod noise;
pub mod ring;

use rand::{CryptoRng, Rng};

use crate::errors::LWECryptoError;
use crate::keypair::ciphertext::Ciphertext;
use crate::keypair::keys::{PublicKey, SecretKey};
use crate::keypair::params::LweParams;

/// Generates a key pair for dimension `n`, `m` samples and modulus `q`, using ternary noise.
///
/// # Errors
///
/// Returns `LWECryptoError::InvalidParameters` if `n` or `m` is zero and
/// `LWECryptoError::InvalidModulus` if `q < 4`.
pub fn keygen<R: Rng + CryptoRng>(
    n: usize,
    m: usize,
    q: u64,
    rng: &mut R,
) -> Result<(PublicKey, SecretKey), LWECryptoError> {
    LweParams::try_with(n, m, q)?.keygen(rng)
}

/// Encrypts the bit `mu` under `public_key` in Z_q.
///
/// # Errors
///
/// Returns `LWECryptoError::InvalidMessage` if `mu` is not 0 or 1, and
/// `LWECryptoError::DimensionMismatch` if the public key is malformed.
pub fn encrypt<R: Rng + CryptoRng>(
    public_key: &PublicKey,
    mu: u8,
    q: u64,
    rng: &mut R,
) -> Result<Ciphertext, LWECryptoError> {
    LweParams::for_public_key(public_key, q)?.encrypt(public_key, mu, rng)
}

/// Recovers the bit carried by `ciphertext`.
///
/// The result is only correct with high probability; an unlucky noise draw
/// silently yields the wrong bit.
pub fn decrypt(
    ciphertext: &Ciphertext,
    secret_key: &SecretKey,
    q: u64,
) -> Result<u8, LWECryptoError> {
    let ring = LweParams::ring_for(q)?;
    secret_key.decrypt(ciphertext, &ring)
}
