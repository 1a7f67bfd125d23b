//! External system integrations for Veil.
//!
//! This module provides the collaborator seams around the redaction
//! core:
//!
//! - [`detector`] - PII detection (trait + regex implementation)
//! - [`blob`] - opaque blob store for cleansed documents
//! - [`records`] - opaque document store for redaction records
//! - [`keys`] - key persistence strategy
//! - [`factory`] - builds concrete adapters from configuration
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external
//! dependencies and enable testing with in-memory or temp-dir
//! implementations. Every seam is a trait object injected into the
//! pipelines at construction; the core holds no global state.

pub mod blob;
pub mod detector;
pub mod factory;
pub mod keys;
pub mod records;

pub use blob::{BlobStore, FsBlobStore};
pub use detector::{Detector, DetectorOutput, RegexDetector};
pub use keys::{InlineKeyStore, KeyStore};
pub use records::{FsRecordStore, RecordStore};
