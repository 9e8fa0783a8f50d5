//! Boundary error types and host-facing kind codes.

use docseal_crypto::CryptoError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for sealing operations at the host boundary.
pub type EncryptResult<T> = Result<T, EncryptError>;

/// Errors reported to the host for a failed seal operation.
///
/// The host sees exactly one resolution per operation: an envelope or one of
/// these, never both and never a partial envelope.
#[derive(Debug, Error)]
pub enum EncryptError {
    /// The plaintext source could not be opened or read.
    #[error("cannot read source {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A failure inside the cryptographic core.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl EncryptError {
    /// Stable machine-readable code for this error's kind.
    ///
    /// Host bridges (FFI, JSON-RPC, JS promises) reject with this code plus
    /// the `Display` message; the codes are part of the host contract and
    /// never change meaning.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "SOURCE_UNAVAILABLE",
            Self::Crypto(CryptoError::RandomnessUnavailable(_)) => "RANDOMNESS_UNAVAILABLE",
            Self::Crypto(CryptoError::InvalidPublicKey(_)) => "INVALID_PUBLIC_KEY",
            Self::Crypto(CryptoError::KeyTooSmallForPayload { .. }) => {
                "KEY_TOO_SMALL_FOR_PAYLOAD"
            }
            Self::Crypto(CryptoError::EncryptionFailed(_)) => "ENCRYPTION_FAILED",
        }
    }
}
