//! Domain models and types for Veil.
//!
//! This module contains the core domain models, types, and business
//! rules for the reversible-redaction protocol.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RecordId`], [`BlobKey`])
//! - **The placeholder vocabulary** ([`PlaceholderKind`])
//! - **The persisted entity** ([`RedactionRecord`])
//! - **Error types** ([`VeilError`], [`DecryptionError`] and the
//!   adapter sub-errors)
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Veil uses the newtype pattern for identifiers to prevent mixing
//! record ids with blob keys:
//!
//! ```rust
//! use veil::domain::{BlobKey, RecordId};
//!
//! let record_id = RecordId::generate();
//! let blob_key = BlobKey::deidentified(&record_id, "note.txt");
//! // let wrong: RecordId = blob_key;  // Compile error!
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;
pub mod vocabulary;

// Re-export commonly used types for convenience
pub use errors::{
    BlobStoreError, DecryptionError, DetectorError, RecordStoreError, VeilError,
};
pub use ids::{BlobKey, RecordId};
pub use record::RedactionRecord;
pub use result::Result;
pub use vocabulary::{markers, PlaceholderKind, VOCABULARY_SIZE};
