//! Filesystem blob store
//!
//! Stores blobs as plain files under a configured root directory. Blob
//! keys map to relative paths; the `deidentified/` namespace becomes a
//! subdirectory.

use super::BlobStore;
use crate::domain::errors::BlobStoreError;
use crate::domain::ids::BlobKey;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Blob store backed by a local directory
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Creates a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a key to a path under the root
    ///
    /// Rejects keys that would escape the root directory.
    fn path_for(&self, key: &BlobKey) -> Result<PathBuf, BlobStoreError> {
        let relative = Path::new(key.as_str());
        let escapes = relative.components().any(|c| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes {
            return Err(BlobStoreError::Io(format!(
                "blob key escapes storage root: {key}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, key: &BlobKey, bytes: &[u8]) -> Result<(), BlobStoreError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| BlobStoreError::Io(format!("create {}: {e}", parent.display())))?;
        }

        if tokio::fs::try_exists(&path)
            .await
            .map_err(|e| BlobStoreError::Io(e.to_string()))?
        {
            return Err(BlobStoreError::AlreadyExists(key.to_string()));
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| BlobStoreError::Io(format!("write {}: {e}", path.display())))
    }

    async fn get(&self, key: &BlobKey) -> Result<Vec<u8>, BlobStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BlobStoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(BlobStoreError::Io(format!("read {}: {e}", path.display()))),
        }
    }
}
