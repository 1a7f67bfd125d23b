//! Re-identification pipeline
//!
//! Reverses a redaction given its record identifier: look up the
//! record, fetch the cleansed document, decrypt the removed values,
//! and substitute them back in strict positional order. The stored
//! record is never mutated, so the operation is repeatable.

use crate::adapters::blob::BlobStore;
use crate::adapters::keys::KeyStore;
use crate::adapters::records::RecordStore;
use crate::core::redaction::hex_sha256;
use crate::core::substitution::restore_placeholders;
use crate::crypto::decrypt_values;
use crate::domain::errors::{BlobStoreError, RecordStoreError};
use crate::domain::ids::RecordId;
use crate::domain::{Result, VeilError};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Re-identification pipeline
pub struct ReidentificationPipeline {
    blobs: Arc<dyn BlobStore>,
    records: Arc<dyn RecordStore>,
    keys: Arc<dyn KeyStore>,
}

impl ReidentificationPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        records: Arc<dyn RecordStore>,
        keys: Arc<dyn KeyStore>,
    ) -> Self {
        Self {
            blobs,
            records,
            keys,
        }
    }

    /// Reconstruct the original document for a record identifier
    ///
    /// # Errors
    ///
    /// - [`VeilError::RecordNotFound`] when no record exists for the id
    /// - [`VeilError::IncompleteRecord`] when the record is missing
    ///   required fields or cannot be parsed
    /// - [`VeilError::DocumentUnavailable`] when the cleansed blob is
    ///   missing, unreadable, or fails its integrity check
    /// - [`VeilError::Decryption`] when the payload cannot be
    ///   authenticated and decrypted; no partial substitution occurs
    pub async fn reidentify(&self, record_id: &RecordId) -> Result<String> {
        tracing::info!(record_id = %record_id, "Re-identification requested");

        let record = match self.records.find_by_id(record_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                return Err(VeilError::RecordNotFound(format!(
                    "no record with ID: {record_id}"
                )))
            }
            Err(RecordStoreError::Malformed(detail)) => {
                return Err(VeilError::IncompleteRecord(detail))
            }
            Err(e) => return Err(VeilError::StorageUnavailable(e.to_string())),
        };

        record
            .ensure_complete()
            .map_err(|detail| VeilError::IncompleteRecord(format!("{record_id}: {detail}")))?;

        let bytes = match self.blobs.get(&record.document_ref).await {
            Ok(bytes) => bytes,
            Err(BlobStoreError::NotFound(key)) => {
                return Err(VeilError::DocumentUnavailable(format!(
                    "cleansed document missing from storage: {key}"
                )))
            }
            Err(e) => return Err(VeilError::DocumentUnavailable(e.to_string())),
        };

        if hex_sha256(&bytes) != record.document_sha256 {
            return Err(VeilError::DocumentUnavailable(format!(
                "cleansed document failed integrity check: {}",
                record.document_ref
            )));
        }

        let cleansed = String::from_utf8(bytes).map_err(|_| {
            VeilError::DocumentUnavailable(format!(
                "cleansed document is not valid UTF-8: {}",
                record.document_ref
            ))
        })?;

        let key = self
            .keys
            .unseal(record_id, record.encryption_key.expose_secret().as_ref())?;
        let removed_values = decrypt_values(&key, &record.encrypted_payload)?;

        tracing::debug!(
            record_id = %record_id,
            values = removed_values.len(),
            "Substituting removed values"
        );
        let restored = restore_placeholders(&cleansed, &removed_values);

        tracing::info!(record_id = %record_id, "Re-identification complete");
        Ok(restored)
    }
}
