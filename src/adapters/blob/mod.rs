//! Blob store abstraction
//!
//! The cleansed document lives in an opaque blob store with
//! put/get-by-key semantics. The core chooses the keys and never
//! overwrites an existing one.

pub mod fs;

use crate::domain::errors::BlobStoreError;
use crate::domain::ids::BlobKey;
use async_trait::async_trait;

pub use fs::FsBlobStore;

/// Blob store client trait
///
/// Implementations must provide their own atomicity for individual
/// put/get operations; the core performs no locking.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under a fresh key
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::AlreadyExists`] if the key is taken,
    /// or [`BlobStoreError::Io`] on storage failure.
    async fn put(&self, key: &BlobKey, bytes: &[u8]) -> Result<(), BlobStoreError>;

    /// Fetch the bytes stored under a key
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::NotFound`] if no blob exists under
    /// the key, or [`BlobStoreError::Io`] on storage failure.
    async fn get(&self, key: &BlobKey) -> Result<Vec<u8>, BlobStoreError>;
}
