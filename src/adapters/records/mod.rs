//! Record store abstraction
//!
//! Redaction records live in an opaque document store. The core only
//! ever creates and reads records; there is no update or delete path.

pub mod fs;

use crate::domain::errors::RecordStoreError;
use crate::domain::ids::RecordId;
use crate::domain::record::RedactionRecord;
use async_trait::async_trait;

pub use fs::FsRecordStore;

/// Record store client trait
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a newly created record
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::AlreadyExists`] if a record with the
    /// same id exists, or [`RecordStoreError::Io`] on storage failure.
    async fn create(&self, record: &RedactionRecord) -> Result<(), RecordStoreError>;

    /// Look up a record by its identifier
    ///
    /// Returns `Ok(None)` when no record exists, so callers can
    /// distinguish "not found" from a malformed stored record
    /// ([`RecordStoreError::Malformed`]).
    async fn find_by_id(
        &self,
        record_id: &RecordId,
    ) -> Result<Option<RedactionRecord>, RecordStoreError>;

    /// List all stored records
    ///
    /// Used by the `status` command. Malformed entries are skipped and
    /// reported via the returned count of unreadable files.
    async fn list(&self) -> Result<(Vec<RedactionRecord>, usize), RecordStoreError>;
}
