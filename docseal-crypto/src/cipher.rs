//! AES-256-GCM payload encryption.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{ContentKey, NONCE_SIZE};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};

/// GCM authentication tag size in bytes, appended to the ciphertext.
pub const TAG_SIZE: usize = 16;

/// Encrypts a payload under a single-use content key.
///
/// Output is `ciphertext || tag`, so its length is always
/// `payload.len() + TAG_SIZE`. The empty payload is valid and produces a
/// tag-only output. No associated data is bound.
///
/// The nonce must be the one generated alongside `key`; the pairing is what
/// makes GCM's single-use nonce requirement hold.
pub fn encrypt_payload(
    key: &ContentKey,
    nonce: &[u8; NONCE_SIZE],
    payload: &[u8],
) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .encrypt(Nonce::from_slice(nonce), payload)
        .map_err(|e| CryptoError::EncryptionFailed(format!("AES-GCM encrypt: {e}")))
}
