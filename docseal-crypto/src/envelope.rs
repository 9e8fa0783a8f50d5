//! Envelope assembly and the end-to-end seal pipeline.
//!
//! The envelope is the sole externally visible artifact: the wrapped content
//! key, the authenticated ciphertext, and the nonce, each base64-encoded for
//! text-safe transport. All three fields always come from the same seal
//! invocation.

use crate::cipher::encrypt_payload;
use crate::error::CryptoResult;
use crate::key::{KeyMaterial, NONCE_SIZE};
use crate::wrap::wrap_key;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};

/// A sealed payload, ready for transport.
///
/// Every field is standard-alphabet base64 without padding or line wrapping;
/// a decrypting counterpart must decode with the same convention. Once
/// assembled an envelope is immutable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    /// Content key wrapped with RSA-OAEP-SHA256 (one modulus in length).
    pub encrypted_aes_key: String,
    /// AES-256-GCM output: payload ciphertext followed by the 128-bit tag.
    pub ciphertext: String,
    /// 96-bit GCM nonce. Required, alongside the unwrapped key, to decrypt.
    pub nonce: String,
}

impl Envelope {
    /// Encodes the three raw fields of one seal invocation.
    ///
    /// Pure data shaping; no cryptography happens here.
    pub fn assemble(wrapped_key: &[u8], ciphertext: &[u8], nonce: &[u8; NONCE_SIZE]) -> Self {
        Self {
            encrypted_aes_key: STANDARD_NO_PAD.encode(wrapped_key),
            ciphertext: STANDARD_NO_PAD.encode(ciphertext),
            nonce: STANDARD_NO_PAD.encode(nonce),
        }
    }
}

/// Seals a payload for a recipient.
///
/// Runs the full pipeline: generate fresh key material, encrypt the payload,
/// wrap the content key, assemble the envelope. Each call draws its own key
/// and nonce, so sealing the same payload twice yields unrelated envelopes.
/// The content key lives only on this call's stack and is zeroized when the
/// call returns, on success and on every error path.
pub fn seal(payload: &[u8], recipient: &RsaPublicKey) -> CryptoResult<Envelope> {
    let material = KeyMaterial::generate()?;
    let ciphertext = encrypt_payload(&material.key, &material.nonce, payload)?;
    let wrapped = wrap_key(recipient, &material.key)?;
    Ok(Envelope::assemble(&wrapped, &ciphertext, &material.nonce))
}
