//! Key storage seam
//!
//! The observed deployment stores each record's encryption key next to
//! the ciphertext it protects, which forfeits confidentiality at rest.
//! That behavior is preserved for compatibility, but sealed behind this
//! trait so a separate key store (KMS, HSM, envelope-encrypted vault)
//! can be substituted without touching either pipeline.

use crate::crypto::EnvelopeKey;
use crate::domain::errors::DecryptionError;
use crate::domain::ids::RecordId;
use crate::domain::{Result, VeilError};

/// Key persistence strategy for per-record keys
pub trait KeyStore: Send + Sync {
    /// Produces the representation persisted with the record
    fn seal(&self, record_id: &RecordId, key: &EnvelopeKey) -> Result<String>;

    /// Recovers the key from its persisted representation
    fn unseal(&self, record_id: &RecordId, sealed: &str) -> Result<EnvelopeKey>;
}

/// Stores the key inline with the record, base64-encoded
///
/// Reproduces the original co-location behavior. The name is a
/// deliberate reminder that the key travels with the data it protects.
#[derive(Debug, Clone, Default)]
pub struct InlineKeyStore;

impl InlineKeyStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyStore for InlineKeyStore {
    fn seal(&self, _record_id: &RecordId, key: &EnvelopeKey) -> Result<String> {
        Ok(key.to_base64())
    }

    fn unseal(&self, record_id: &RecordId, sealed: &str) -> Result<EnvelopeKey> {
        if sealed.trim().is_empty() {
            return Err(VeilError::IncompleteRecord(format!(
                "{record_id}: stored key is empty"
            )));
        }
        EnvelopeKey::from_base64(sealed)
            .map_err(|e: DecryptionError| VeilError::Decryption(e))
    }
}
