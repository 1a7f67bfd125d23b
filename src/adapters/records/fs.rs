//! Filesystem record store
//!
//! One JSON document per record, named `<record-id>.json`, under a
//! configured directory.

use super::RecordStore;
use crate::domain::errors::RecordStoreError;
use crate::domain::ids::RecordId;
use crate::domain::record::RedactionRecord;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Record store backed by a local directory of JSON files
#[derive(Debug, Clone)]
pub struct FsRecordStore {
    root: PathBuf,
}

impl FsRecordStore {
    /// Creates a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, record_id: &RecordId) -> PathBuf {
        // Record ids are generated as "PHI-<uuid>"; keep the file name flat.
        let file = format!("{}.json", record_id.as_str().replace(['/', '\\'], "_"));
        self.root.join(file)
    }

    async fn read_record(path: &Path) -> Result<RedactionRecord, RecordStoreError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| RecordStoreError::Io(format!("read {}: {e}", path.display())))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            RecordStoreError::Malformed(format!("{}: {e}", path.display()))
        })
    }
}

#[async_trait]
impl RecordStore for FsRecordStore {
    async fn create(&self, record: &RedactionRecord) -> Result<(), RecordStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| RecordStoreError::Io(format!("create {}: {e}", self.root.display())))?;

        let path = self.path_for(&record.record_id);
        if tokio::fs::try_exists(&path)
            .await
            .map_err(|e| RecordStoreError::Io(e.to_string()))?
        {
            return Err(RecordStoreError::AlreadyExists(
                record.record_id.to_string(),
            ));
        }

        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| RecordStoreError::Io(format!("serialize record: {e}")))?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| RecordStoreError::Io(format!("write {}: {e}", path.display())))
    }

    async fn find_by_id(
        &self,
        record_id: &RecordId,
    ) -> Result<Option<RedactionRecord>, RecordStoreError> {
        let path = self.path_for(record_id);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Self::read_record(&path).await.map(Some),
            Ok(false) => Ok(None),
            Err(e) => Err(RecordStoreError::Io(e.to_string())),
        }
    }

    async fn list(&self) -> Result<(Vec<RedactionRecord>, usize), RecordStoreError> {
        let mut records = Vec::new();
        let mut unreadable = 0usize;

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok((records, unreadable));
            }
            Err(e) => {
                return Err(RecordStoreError::Io(format!(
                    "read {}: {e}",
                    self.root.display()
                )))
            }
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RecordStoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_record(&path).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable record");
                    unreadable += 1;
                }
            }
        }

        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok((records, unreadable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::BlobKey;
    use tempfile::TempDir;

    fn sample_record(id: &str) -> RedactionRecord {
        RedactionRecord::new(
            RecordId::new(id).unwrap(),
            BlobKey::new(format!("deidentified/{id}-note.txt")).unwrap(),
            "dG9rZW4=".to_string(),
            "a2V5".to_string(),
            "00".repeat(32),
        )
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let dir = TempDir::new().unwrap();
        let store = FsRecordStore::new(dir.path());
        let record = sample_record("PHI-1");

        store.create(&record).await.unwrap();
        let found = store
            .find_by_id(&record.record_id)
            .await
            .unwrap()
            .expect("record should exist");
        assert_eq!(found.record_id, record.record_id);
        assert_eq!(found.encrypted_payload, record.encrypted_payload);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FsRecordStore::new(dir.path());

        let found = store
            .find_by_id(&RecordId::new("PHI-nope").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let dir = TempDir::new().unwrap();
        let store = FsRecordStore::new(dir.path());
        let record = sample_record("PHI-1");

        store.create(&record).await.unwrap();
        let err = store.create(&record).await.unwrap_err();
        assert!(matches!(err, RecordStoreError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_malformed_record_is_distinguishable() {
        let dir = TempDir::new().unwrap();
        let store = FsRecordStore::new(dir.path());
        std::fs::write(dir.path().join("PHI-bad.json"), b"{not json").unwrap();

        let err = store
            .find_by_id(&RecordId::new("PHI-bad").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, RecordStoreError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_files() {
        let dir = TempDir::new().unwrap();
        let store = FsRecordStore::new(dir.path());
        store.create(&sample_record("PHI-1")).await.unwrap();
        store.create(&sample_record("PHI-2")).await.unwrap();
        std::fs::write(dir.path().join("PHI-bad.json"), b"{not json").unwrap();

        let (records, unreadable) = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(unreadable, 1);
    }

    #[tokio::test]
    async fn test_list_on_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FsRecordStore::new(dir.path().join("never-created"));

        let (records, unreadable) = store.list().await.unwrap();
        assert!(records.is_empty());
        assert_eq!(unreadable, 0);
    }
}
