//! Per-call key material: content key and nonce generation.

use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Content key size in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (96-bit GCM nonce).
pub const NONCE_SIZE: usize = 12;

/// A single-use 256-bit content key.
///
/// Generated fresh for each seal operation and zeroized on drop. Not `Clone`:
/// exactly one copy exists, owned by the call that generated it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ContentKey([u8; KEY_SIZE]);

impl ContentKey {
    /// Draws a fresh key from the OS CSPRNG.
    pub fn generate() -> CryptoResult<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::RandomnessUnavailable(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Constructs a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for ContentKey {
    // Key material must never reach logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ContentKey(..)")
    }
}

/// Fresh key material for one seal operation: a content key and the nonce
/// paired with it.
///
/// Nonce uniqueness per key holds by construction: both values are generated
/// together and the key is never used for a second encryption.
pub struct KeyMaterial {
    pub key: ContentKey,
    pub nonce: [u8; NONCE_SIZE],
}

impl KeyMaterial {
    /// Generates a key and nonce from the OS CSPRNG.
    pub fn generate() -> CryptoResult<Self> {
        let key = ContentKey::generate()?;
        let mut nonce = [0u8; NONCE_SIZE];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| CryptoError::RandomnessUnavailable(e.to_string()))?;
        Ok(Self { key, nonce })
    }
}
