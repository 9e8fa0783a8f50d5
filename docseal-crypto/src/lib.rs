//! Hybrid envelope encryption core for DocSeal.
//!
//! Seals a byte payload for a recipient using:
//! - AES-256-GCM for authenticated encryption of the payload
//! - RSA-OAEP (SHA-256) for wrapping the content key
//! - Fresh key material from the OS CSPRNG on every call
//!
//! # Architecture
//!
//! Sealing is a strict four-stage pipeline:
//!
//! 1. **Key material**: a random 256-bit content key and 96-bit nonce are
//!    generated for this one call and never reused or persisted.
//! 2. **Payload encryption**: the payload is encrypted under the content
//!    key with AES-256-GCM, producing ciphertext plus a 128-bit tag.
//! 3. **Key wrapping**: the content key is encrypted under the recipient's
//!    RSA public key with OAEP-SHA256.
//! 4. **Envelope assembly**: wrapped key, ciphertext, and nonce are
//!    base64-encoded into the transportable [`Envelope`].
//!
//! Only the holder of the matching RSA private key can recover the content
//! key, and with it the payload. The core is pure and synchronous; source
//! resolution and the async call boundary live in `docseal-encryptor`.

mod cipher;
mod envelope;
mod error;
mod key;
mod wrap;

pub use cipher::{encrypt_payload, TAG_SIZE};
pub use envelope::{seal, Envelope};
pub use error::{CryptoError, CryptoResult};
pub use key::{ContentKey, KeyMaterial, KEY_SIZE, NONCE_SIZE};
pub use wrap::{decode_recipient_key, oaep_capacity, wrap_key};

// Recipient key type, so callers of `seal` need no direct rsa dependency.
pub use rsa::RsaPublicKey;
