//! Async sealing boundary for DocSeal host applications.
//!
//! Exposes the one operation hosts call: seal a file (or an in-memory
//! payload) for a recipient identified by a base64 DER public key. The
//! caller gets control back immediately; the future resolves exactly once,
//! with either a complete [`Envelope`] or an [`EncryptError`].
//!
//! The source read and the CPU-bound sealing work are the two suspension
//! points; sealing runs on the blocking pool so large payloads never stall
//! the async executor. Concurrent calls are fully independent; each draws
//! its own key material and shares nothing.
//!
//! Logging records paths, sizes, and outcomes. Key material never appears in
//! logs and is zeroized inside the core when each call ends.

mod error;

pub use docseal_crypto::Envelope;
pub use error::{EncryptError, EncryptResult};

use docseal_crypto::{decode_recipient_key, seal, CryptoError};
use std::path::Path;
use tracing::debug;

/// Seals the file at `path` for the recipient.
///
/// The source is resolved first: an unreadable path fails with
/// `SourceUnavailable` before any key material is generated, so doomed calls
/// never consume randomness. The file handle is released when the read
/// completes, on every exit path.
pub async fn encrypt_file(
    path: impl AsRef<Path>,
    recipient_key_b64: &str,
) -> EncryptResult<Envelope> {
    let path = path.as_ref();
    let payload = tokio::fs::read(path)
        .await
        .map_err(|source| EncryptError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = payload.len(), "source resolved");

    encrypt_bytes(payload, recipient_key_b64).await
}

/// Seals an in-memory payload for the recipient.
///
/// Same operation as [`encrypt_file`] minus source resolution, for hosts
/// that already hold the bytes. Takes ownership of the payload so no copy is
/// made on the way to the sealing task.
pub async fn encrypt_bytes(
    payload: Vec<u8>,
    recipient_key_b64: &str,
) -> EncryptResult<Envelope> {
    let recipient = decode_recipient_key(recipient_key_b64)?;

    let payload_len = payload.len();
    let envelope = tokio::task::spawn_blocking(move || seal(&payload, &recipient))
        .await
        .map_err(|e| CryptoError::EncryptionFailed(format!("sealing task: {e}")))??;

    debug!(payload_bytes = payload_len, "payload sealed");
    Ok(envelope)
}
