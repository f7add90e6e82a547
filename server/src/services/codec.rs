//! Session cookie codec.
//!
//! ARCHITECTURE
//! ============
//! A [`SessionRecord`] is serialized together with its expiry, sealed with
//! AES-256-GCM, and written as `s1.<base64url(nonce || ciphertext)>`. The AEAD
//! tag provides integrity, so a cookie either opens to the exact record that
//! was sealed or does not open at all.
//!
//! Keys are derived from the configured secrets with SHA-256 under a fixed
//! context label. New cookies are sealed with the current secret; retired
//! secrets stay accepted for opening until they are removed from config.
//!
//! TRADE-OFFS
//! ==========
//! `decode` collapses every failure to `None`, so callers cannot tell a
//! tampered cookie from a missing one. The reason only reaches the debug log.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use identity::SessionRecord;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::{Duration, OffsetDateTime};

use crate::config::{SessionConfig, SessionSecret};

const ENVELOPE_PREFIX: &str = "s1.";
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_CONTEXT: &[u8] = b"session-cookie/aes-256-gcm/v1";

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to seal session envelope")]
    Seal,
}

/// Why an envelope did not open. Never shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnsealError {
    #[error("unsupported envelope version")]
    Version,
    #[error("envelope is not valid base64url")]
    Encoding,
    #[error("envelope is truncated")]
    Truncated,
    #[error("no configured key authenticates the envelope")]
    Authentication,
    #[error("sealed payload is not a session record")]
    Payload,
    #[error("session has expired")]
    Expired,
}

#[derive(Serialize, Deserialize)]
struct SealedPayload {
    /// Expiry as unix seconds.
    exp: i64,
    session: SessionRecord,
}

/// Seals and opens session records. Holds no per-request state.
pub struct SessionCodec {
    current: Aes256Gcm,
    previous: Vec<Aes256Gcm>,
    ttl: Duration,
}

impl SessionCodec {
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            current: derive_cipher(&config.secret),
            previous: config.previous_secrets.iter().map(derive_cipher).collect(),
            ttl: config.ttl,
        }
    }

    /// Seal a record, valid for the configured ttl from now.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if serialization or encryption fails.
    pub fn encode(&self, record: &SessionRecord) -> Result<String, CodecError> {
        self.encode_at(record, OffsetDateTime::now_utc())
    }

    /// Seal a record as if `now` were the current time.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if serialization or encryption fails.
    pub fn encode_at(&self, record: &SessionRecord, now: OffsetDateTime) -> Result<String, CodecError> {
        let exp = now.checked_add(self.ttl).ok_or(CodecError::Seal)?.unix_timestamp();
        let payload = SealedPayload { exp, session: record.clone().normalized() };
        let plaintext = serde_json::to_vec(&payload)?;

        let nonce_bytes: [u8; NONCE_LEN] = rand::rng().random();
        let ciphertext = self
            .current
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_slice())
            .map_err(|_| CodecError::Seal)?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);
        Ok(format!("{ENVELOPE_PREFIX}{}", URL_SAFE_NO_PAD.encode(sealed)))
    }

    /// Open an envelope, or `None` for anything that is not a valid, unexpired session.
    #[must_use]
    pub fn decode(&self, envelope: &str) -> Option<SessionRecord> {
        match self.open(envelope, OffsetDateTime::now_utc()) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::debug!(%reason, "session envelope rejected");
                None
            }
        }
    }

    /// Open an envelope and report why it failed.
    ///
    /// # Errors
    ///
    /// Returns the [`UnsealError`] describing the first check that failed.
    pub fn open(&self, envelope: &str, now: OffsetDateTime) -> Result<SessionRecord, UnsealError> {
        let encoded = envelope.strip_prefix(ENVELOPE_PREFIX).ok_or(UnsealError::Version)?;
        let sealed = URL_SAFE_NO_PAD.decode(encoded).map_err(|_| UnsealError::Encoding)?;
        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(UnsealError::Truncated);
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);
        let plaintext = std::iter::once(&self.current)
            .chain(&self.previous)
            .find_map(|cipher| cipher.decrypt(nonce, ciphertext).ok())
            .ok_or(UnsealError::Authentication)?;

        let payload: SealedPayload = serde_json::from_slice(&plaintext).map_err(|_| UnsealError::Payload)?;
        if payload.exp <= now.unix_timestamp() {
            return Err(UnsealError::Expired);
        }
        Ok(payload.session.normalized())
    }
}

fn derive_cipher(secret: &SessionSecret) -> Aes256Gcm {
    let key = Sha256::new()
        .chain_update(KEY_CONTEXT)
        .chain_update(secret.as_bytes())
        .finalize();
    Aes256Gcm::new(&key)
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
