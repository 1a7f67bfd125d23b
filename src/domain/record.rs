//! Redaction record entity
//!
//! The persisted mapping from a record identifier to the cleansed
//! document and the encrypted removed-values payload. A record is
//! created exactly once by the redaction pipeline and only ever read
//! afterwards; there is no update path.

use crate::config::{secret_string, SecretString};
use crate::domain::ids::{BlobKey, RecordId};
use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Persisted redaction record
///
/// Binds a record identifier to the cleansed-document blob key, the
/// encrypted removed-values token, and the sealed per-record key.
///
/// The key is stored alongside the ciphertext it protects. That
/// co-location is preserved from the original deployment for
/// compatibility; key persistence is isolated behind the
/// [`KeyStore`](crate::adapters::KeyStore) seam so a separate key store
/// can replace it without touching the record shape consumers see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionRecord {
    /// Primary lookup key, immutable after creation
    pub record_id: RecordId,

    /// Storage key of the cleansed document blob, unique per record
    pub document_ref: BlobKey,

    /// Opaque base64 token encoding the ordered removed-values list
    pub encrypted_payload: String,

    /// Sealed per-record key, as produced by the configured key store
    pub encryption_key: SecretString,

    /// Hex SHA-256 of the cleansed document at write time
    pub document_sha256: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl RedactionRecord {
    /// Creates a record stamped with the current time
    pub fn new(
        record_id: RecordId,
        document_ref: BlobKey,
        encrypted_payload: String,
        encryption_key: String,
        document_sha256: String,
    ) -> Self {
        Self {
            record_id,
            document_ref,
            encrypted_payload,
            encryption_key: secret_string(encryption_key),
            document_sha256,
            created_at: Utc::now(),
        }
    }

    /// Verifies that every field required for re-identification is present
    ///
    /// Guards against partially-written records: a record that exists
    /// but is missing its blob key, payload, or key cannot be reversed
    /// and must fail distinguishably from "not found".
    ///
    /// # Errors
    ///
    /// Returns the names of the missing fields.
    pub fn ensure_complete(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.document_ref.as_str().trim().is_empty() {
            missing.push("document_ref");
        }
        if self.encrypted_payload.trim().is_empty() {
            missing.push("encrypted_payload");
        }
        if self.encryption_key.expose_secret().is_empty() {
            missing.push("encryption_key");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("missing required fields: {}", missing.join(", ")))
        }
    }
}
