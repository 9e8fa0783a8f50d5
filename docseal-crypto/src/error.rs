//! Crypto error types.

use thiserror::Error;

/// Result type for sealing operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while sealing a payload.
///
/// Every failure of an underlying primitive is classified into one of these
/// variants at the call site; raw primitive errors do not cross this crate's
/// boundary.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The OS secure random source could not produce key material.
    ///
    /// Fatal for the operation. Never downgraded to a weaker source and
    /// never retried here; retrying is a caller decision.
    #[error("secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    /// The recipient key is malformed, undecodable, or not an RSA key.
    #[error("invalid recipient public key: {0}")]
    InvalidPublicKey(String),

    /// The recipient's RSA modulus cannot wrap the content key under
    /// OAEP-SHA256.
    #[error(
        "recipient key too small: {modulus_bytes}-byte modulus wraps at most {capacity} bytes"
    )]
    KeyTooSmallForPayload {
        modulus_bytes: usize,
        capacity: usize,
    },

    /// A cryptographic primitive rejected inputs that passed validation.
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}
