//! Adapter factory
//!
//! Builds the concrete collaborators the pipelines depend on from the
//! loaded configuration. Everything is returned as an `Arc` trait
//! object so the pipelines stay independent of the implementations.

use crate::adapters::blob::{BlobStore, FsBlobStore};
use crate::adapters::detector::{Detector, RegexDetector};
use crate::adapters::keys::{InlineKeyStore, KeyStore};
use crate::adapters::records::{FsRecordStore, RecordStore};
use crate::config::{DetectorKind, VeilConfig};
use crate::domain::{Result, VeilError};
use std::sync::Arc;

/// Create the blob store from configuration
pub fn create_blob_store(config: &VeilConfig) -> Arc<dyn BlobStore> {
    tracing::debug!(root = %config.storage.blob_root, "Creating filesystem blob store");
    Arc::new(FsBlobStore::new(&config.storage.blob_root))
}

/// Create the record store from configuration
pub fn create_record_store(config: &VeilConfig) -> Arc<dyn RecordStore> {
    tracing::debug!(root = %config.storage.record_root, "Creating filesystem record store");
    Arc::new(FsRecordStore::new(&config.storage.record_root))
}

/// Create the detector from configuration
///
/// # Errors
///
/// Returns a configuration error if a detection pattern cannot be
/// compiled.
pub fn create_detector(config: &VeilConfig) -> Result<Arc<dyn Detector>> {
    match config.detector.kind {
        DetectorKind::Regex => {
            let detector = RegexDetector::with_config(&config.detector)
                .map_err(|e| VeilError::Configuration(e.to_string()))?;
            Ok(Arc::new(detector))
        }
    }
}

/// Create the key store
///
/// Only the inline strategy is shipped; the seam exists so a separate
/// key store can be configured here later.
pub fn create_key_store(_config: &VeilConfig) -> Arc<dyn KeyStore> {
    Arc::new(InlineKeyStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_all_adapters() {
        let config = VeilConfig::default();
        let _blobs = create_blob_store(&config);
        let _records = create_record_store(&config);
        let _keys = create_key_store(&config);
        assert!(create_detector(&config).is_ok());
    }

    #[test]
    fn test_detector_creation_honors_exclusions() {
        let mut config = VeilConfig::default();
        config.detector.excluded_categories = vec!["labs".to_string()];
        assert!(create_detector(&config).is_ok());
    }
}
