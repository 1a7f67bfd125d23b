//! Domain error types
//!
//! This module defines the error hierarchy for Veil. All errors are
//! domain-specific and don't expose third-party types. Each pipeline
//! failure carries a distinguishable kind so callers can tell
//! "record not found" from "corrupted decryption" from "storage fault".

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed caller input (empty document, empty detector output)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// External detector failed before any storage write
    #[error("Detection failed: {0}")]
    DetectionFailed(String),

    /// Blob store I/O failure during redaction
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// No redaction record exists for the given identifier
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A record exists but is missing required fields or cannot be parsed
    #[error("Incomplete record: {0}")]
    IncompleteRecord(String),

    /// The cleansed document blob is missing, unreadable, or corrupted
    #[error("Document unavailable: {0}")]
    DocumentUnavailable(String),

    /// Decryption of the removed-values payload failed
    #[error("Decryption error: {0}")]
    Decryption(#[from] DecryptionError),

    /// Encryption-side failures in the crypto envelope
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Decryption failures in the crypto envelope
///
/// Decryption never returns partial or garbage output: a token that is
/// malformed, was produced under a different key, or fails the
/// authentication check yields one of these variants instead.
#[derive(Debug, Error)]
pub enum DecryptionError {
    /// The token is not valid base64 or is too short to carry a nonce
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// The stored key could not be decoded into key material
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// Authentication failed: wrong key or tampered ciphertext
    #[error(
        "Authentication failed: ciphertext was tampered with or encrypted under a different key"
    )]
    AuthenticationFailed,

    /// The decrypted plaintext is not valid UTF-8
    #[error("Decrypted payload is not valid UTF-8")]
    InvalidPlaintext,
}

/// Blob store failures
///
/// Raised by [`BlobStore`](crate::adapters::BlobStore) implementations.
/// The pipelines map these to the step-appropriate [`VeilError`] kind:
/// a failed put surfaces as `StorageUnavailable`, a failed get as
/// `DocumentUnavailable`.
#[derive(Debug, Error)]
pub enum BlobStoreError {
    /// No blob exists under the given key
    #[error("Blob not found: {0}")]
    NotFound(String),

    /// A blob already exists under the given key (keys are never reused)
    #[error("Blob already exists: {0}")]
    AlreadyExists(String),

    /// Underlying I/O failure
    #[error("Blob store I/O failure: {0}")]
    Io(String),
}

/// Record store failures
///
/// Raised by [`RecordStore`](crate::adapters::RecordStore)
/// implementations. "Not found" is not an error: `find_by_id` returns
/// `Ok(None)` so the pipeline can surface `RecordNotFound` distinctly
/// from a malformed stored record.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// A record already exists under the given identifier
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    /// A stored record exists but could not be parsed
    #[error("Stored record is malformed: {0}")]
    Malformed(String),

    /// Underlying I/O failure
    #[error("Record store I/O failure: {0}")]
    Io(String),
}

/// Detector failures
///
/// Raised by [`Detector`](crate::adapters::Detector) implementations.
/// Always mapped to [`VeilError::DetectionFailed`] by the redaction
/// pipeline, which aborts before any storage write.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// A detection pattern could not be compiled
    #[error("Invalid detection pattern for {category}: {message}")]
    InvalidPattern { category: String, message: String },

    /// The detector ran but could not produce usable output
    #[error("Detector execution failed: {0}")]
    Execution(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
