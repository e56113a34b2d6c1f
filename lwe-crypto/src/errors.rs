#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LWECryptoError {
    /// Error when creating a ring or a parameter set with an unusable modulus.
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Message must be a single bit (0 or 1), got {0}")]
    InvalidMessage(u64),
    #[error("InvalidSelection: {0}")]
    InvalidSelection(String),
}
