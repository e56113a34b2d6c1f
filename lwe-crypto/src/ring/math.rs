//! Implementation of ring ops using modular arithmetic.

use crate::errors::LWECryptoError;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_q using modular arithmetic.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and representable as an `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, LWECryptoError> {
        if modulus <= 1 {
            return Err(LWECryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        if modulus > i64::MAX as u64 {
            return Err(LWECryptoError::InvalidModulus(format!(
                "Modulus must fit into i64, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(97).unwrap();
    /// assert_eq!(ring.modulus(), 97);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// assert_eq!(ring.add(12, 13), 5);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a) as i128;
        let b_norm = self.normalize(b) as i128;

        ((a_norm + b_norm) % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a) as i128;
        let b_norm = self.normalize(b) as i128;

        (a_norm - b_norm).rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(-2, 6), 8); // -12 mod 10 = 8
    /// assert_eq!(ring.mul(4, 5), 0); // 20 mod 10 = 0
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a) as i128;
        let b_norm = self.normalize(b) as i128;

        ((a_norm * b_norm) % self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lwe_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.neg(3), 7);
    /// assert_eq!(ring.neg(0), 0);
    /// assert!(ring.add(3, ring.neg(3)) == 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Returns `⌊q/2⌋`, the offset a set message bit is encoded as.
    pub fn half(&self) -> i64 {
        (self.modulus / 2) as i64
    }

    /// Returns true if `value` is already a canonical representative in `[0, modulus)`.
    pub fn contains(&self, value: i64) -> bool {
        value >= 0 && (value as u64) < self.modulus
    }
}
