//! Redaction pipeline
//!
//! Orchestrates one de-identification request: validate the input,
//! run the detector, encrypt the removed values, store the cleansed
//! document, and persist the redaction record. Each request is an
//! independent, stateless unit of work; collaborators are injected at
//! construction and shared via `Arc`.

use crate::adapters::blob::BlobStore;
use crate::adapters::detector::Detector;
use crate::adapters::keys::KeyStore;
use crate::adapters::records::RecordStore;
use crate::crypto::{encrypt_values, EnvelopeKey};
use crate::domain::ids::{BlobKey, RecordId};
use crate::domain::record::RedactionRecord;
use crate::domain::{Result, VeilError};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Result of a successful redaction
#[derive(Debug, Clone)]
pub struct RedactionOutcome {
    /// Identifier for later re-identification
    pub record_id: RecordId,

    /// Where the cleansed document was stored
    pub document_ref: BlobKey,

    /// How many values were removed and encrypted
    pub removed_count: usize,
}

/// Redaction pipeline
pub struct RedactionPipeline {
    detector: Arc<dyn Detector>,
    blobs: Arc<dyn BlobStore>,
    records: Arc<dyn RecordStore>,
    keys: Arc<dyn KeyStore>,
}

impl RedactionPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(
        detector: Arc<dyn Detector>,
        blobs: Arc<dyn BlobStore>,
        records: Arc<dyn RecordStore>,
        keys: Arc<dyn KeyStore>,
    ) -> Self {
        Self {
            detector,
            blobs,
            records,
            keys,
        }
    }

    /// De-identify a document and persist the reversible mapping
    ///
    /// `source_name` is kept as a human-readable suffix on the blob
    /// key; it plays no role in identifier generation.
    ///
    /// # Errors
    ///
    /// - [`VeilError::InvalidInput`] for an empty document or empty
    ///   detector output
    /// - [`VeilError::DetectionFailed`] if the detector errors; nothing
    ///   is written in that case
    /// - [`VeilError::StorageUnavailable`] if the blob store or record
    ///   store fails; a record-store failure after the blob write
    ///   leaves an orphaned blob, which is logged and accepted
    pub async fn redact(&self, document: &str, source_name: &str) -> Result<RedactionOutcome> {
        if document.trim().is_empty() {
            return Err(VeilError::InvalidInput(
                "document is empty".to_string(),
            ));
        }

        let detection = self
            .detector
            .detect(document)
            .await
            .map_err(|e| VeilError::DetectionFailed(e.to_string()))?;

        if detection.cleansed_document.trim().is_empty() {
            return Err(VeilError::InvalidInput(
                "detector produced an empty cleansed document".to_string(),
            ));
        }

        let record_id = RecordId::generate();
        tracing::info!(
            record_id = %record_id,
            removed = detection.removed_values.len(),
            "Redacting document"
        );

        let key = EnvelopeKey::generate();
        let encrypted_payload = encrypt_values(&key, &detection.removed_values)?;

        let document_ref = BlobKey::deidentified(&record_id, source_name);
        self.blobs
            .put(&document_ref, detection.cleansed_document.as_bytes())
            .await
            .map_err(|e| VeilError::StorageUnavailable(e.to_string()))?;

        let document_sha256 = hex_sha256(detection.cleansed_document.as_bytes());
        let sealed_key = self.keys.seal(&record_id, &key)?;
        let record = RedactionRecord::new(
            record_id.clone(),
            document_ref.clone(),
            encrypted_payload,
            sealed_key,
            document_sha256,
        );

        if let Err(e) = self.records.create(&record).await {
            // The blob was already written; there is no compensation
            // path, so the orphan stays and the request fails.
            tracing::warn!(
                record_id = %record_id,
                document_ref = %document_ref,
                error = %e,
                "Record persistence failed after blob write; orphaned blob remains"
            );
            return Err(VeilError::StorageUnavailable(e.to_string()));
        }

        tracing::info!(
            record_id = %record_id,
            document_ref = %document_ref,
            "Redaction complete"
        );

        Ok(RedactionOutcome {
            record_id,
            document_ref,
            removed_count: detection.removed_values.len(),
        })
    }
}

/// Hex-encoded SHA-256 of a byte slice
pub(crate) fn hex_sha256(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::detector::DetectorOutput;
    use crate::adapters::keys::InlineKeyStore;
    use crate::adapters::{FsBlobStore, FsRecordStore};
    use crate::domain::errors::DetectorError;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct FixedDetector(DetectorOutput);

    #[async_trait]
    impl Detector for FixedDetector {
        async fn detect(&self, _document: &str) -> std::result::Result<DetectorOutput, DetectorError> {
            Ok(self.0.clone())
        }
    }

    struct FailingDetector;

    #[async_trait]
    impl Detector for FailingDetector {
        async fn detect(&self, _document: &str) -> std::result::Result<DetectorOutput, DetectorError> {
            Err(DetectorError::Execution("model offline".to_string()))
        }
    }

    fn pipeline_with(
        dir: &TempDir,
        detector: Arc<dyn Detector>,
    ) -> (RedactionPipeline, Arc<FsRecordStore>) {
        let records = Arc::new(FsRecordStore::new(dir.path().join("records")));
        let pipeline = RedactionPipeline::new(
            detector,
            Arc::new(FsBlobStore::new(dir.path().join("blobs"))),
            records.clone(),
            Arc::new(InlineKeyStore::new()),
        );
        (pipeline, records)
    }

    #[tokio::test]
    async fn test_redact_persists_blob_and_record() {
        let dir = TempDir::new().unwrap();
        let detector = Arc::new(FixedDetector(DetectorOutput {
            cleansed_document: "Patient *name* born *dob*".to_string(),
            removed_values: vec!["Jane Doe".to_string(), "1990-01-01".to_string()],
        }));
        let (pipeline, records) = pipeline_with(&dir, detector);

        let outcome = pipeline
            .redact("Patient Jane Doe born 1990-01-01", "note.txt")
            .await
            .unwrap();

        assert!(outcome.record_id.as_str().starts_with("PHI-"));
        assert_eq!(outcome.removed_count, 2);
        assert!(outcome.document_ref.as_str().starts_with("deidentified/"));

        let stored = records
            .find_by_id(&outcome.record_id)
            .await
            .unwrap()
            .expect("record should be persisted");
        assert!(stored.ensure_complete().is_ok());
    }

    #[tokio::test]
    async fn test_empty_document_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let detector = Arc::new(FixedDetector(DetectorOutput {
            cleansed_document: "x".to_string(),
            removed_values: vec![],
        }));
        let (pipeline, _) = pipeline_with(&dir, detector);

        let err = pipeline.redact("   \n", "note.txt").await.unwrap_err();
        assert!(matches!(err, VeilError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_detector_failure_aborts_before_storage() {
        let dir = TempDir::new().unwrap();
        let (pipeline, records) = pipeline_with(&dir, Arc::new(FailingDetector));

        let err = pipeline.redact("some text", "note.txt").await.unwrap_err();
        assert!(matches!(err, VeilError::DetectionFailed(_)));

        let (stored, _) = records.list().await.unwrap();
        assert!(stored.is_empty());
        assert!(!dir.path().join("blobs").exists());
    }

    #[tokio::test]
    async fn test_empty_cleansed_output_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let detector = Arc::new(FixedDetector(DetectorOutput {
            cleansed_document: "  ".to_string(),
            removed_values: vec![],
        }));
        let (pipeline, _) = pipeline_with(&dir, detector);

        let err = pipeline.redact("some text", "note.txt").await.unwrap_err();
        assert!(matches!(err, VeilError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_concurrent_redactions_get_distinct_ids() {
        let dir = TempDir::new().unwrap();
        let detector = Arc::new(FixedDetector(DetectorOutput {
            cleansed_document: "Patient *name*".to_string(),
            removed_values: vec!["Jane Doe".to_string()],
        }));
        let (pipeline, _) = pipeline_with(&dir, detector);
        let pipeline = Arc::new(pipeline);

        let a = tokio::spawn({
            let p = pipeline.clone();
            async move { p.redact("doc", "a.txt").await.unwrap() }
        });
        let b = tokio::spawn({
            let p = pipeline.clone();
            async move { p.redact("doc", "b.txt").await.unwrap() }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert_ne!(a.record_id, b.record_id);
        assert_ne!(a.document_ref, b.document_ref);
    }

    #[test]
    fn test_hex_sha256_is_stable() {
        assert_eq!(
            hex_sha256(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
