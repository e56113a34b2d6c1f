use crate::ring::Vector;

use serde::{Deserialize, Serialize};

/// Encryption of a single bit: `u = rᵀ·A` and `v = rᵀ·b + ⌊q/2⌋·μ`, both mod q.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    /// Length-n vector in Z_q.
    pub u: Vector,
    /// Scalar in Z_q.
    pub v: i64,
}
