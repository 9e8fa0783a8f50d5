//! RSA-OAEP content key wrapping.
//!
//! The recipient key arrives as base64-encoded DER (X.509
//! SubjectPublicKeyInfo). OAEP with SHA-256 is the only padding accepted;
//! PKCS#1 v1.5 and raw RSA are not semantically secure for key wrapping.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{ContentKey, KEY_SIZE};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use rand::rngs::OsRng;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;

/// OAEP-SHA256 overhead: two hash blocks plus two framing bytes.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

// Recipient keys are exported by a mix of tools; accept the standard
// alphabet with or without trailing padding.
const SPKI_B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Maximum number of bytes an RSA modulus of the given size can wrap under
/// OAEP-SHA256.
pub fn oaep_capacity(modulus_bytes: usize) -> usize {
    modulus_bytes.saturating_sub(OAEP_OVERHEAD)
}

/// Decodes a base64 DER (SubjectPublicKeyInfo) string into an RSA public key.
///
/// Fails with [`CryptoError::InvalidPublicKey`] on malformed base64,
/// malformed DER, or key material of a different asymmetric family.
pub fn decode_recipient_key(base64_spki: &str) -> CryptoResult<RsaPublicKey> {
    let der = SPKI_B64
        .decode(base64_spki.trim())
        .map_err(|e| CryptoError::InvalidPublicKey(format!("base64 decode: {e}")))?;

    RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| CryptoError::InvalidPublicKey(format!("DER decode: {e}")))
}

/// Wraps a content key under the recipient's public key with OAEP-SHA256.
///
/// The wrapped key is exactly one modulus in length (256 bytes for a
/// 2048-bit key). Fails with [`CryptoError::KeyTooSmallForPayload`] if the
/// modulus cannot carry a 32-byte payload under OAEP, rather than assuming
/// the recipient key is large enough.
pub fn wrap_key(recipient: &RsaPublicKey, key: &ContentKey) -> CryptoResult<Vec<u8>> {
    let modulus_bytes = recipient.size();
    let capacity = oaep_capacity(modulus_bytes);
    if KEY_SIZE > capacity {
        return Err(CryptoError::KeyTooSmallForPayload {
            modulus_bytes,
            capacity,
        });
    }

    recipient
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), key.as_bytes())
        .map_err(|e| CryptoError::EncryptionFailed(format!("RSA-OAEP wrap: {e}")))
}
