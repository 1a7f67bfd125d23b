//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers that flow
//! through the redaction protocol. Each type ensures type safety and
//! validates its format on construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix carried by every record identifier
const RECORD_ID_PREFIX: &str = "PHI-";

/// Namespace prefix for cleansed-document blob keys
const DEIDENTIFIED_PREFIX: &str = "deidentified/";

/// Redaction record identifier newtype wrapper
///
/// The primary lookup key for a stored redaction record. Generated once
/// at redaction time and immutable afterwards. Generation is random
/// (UUID v4 body under a `PHI-` prefix) so concurrent redactions never
/// collide; the id is never derived from the source filename or time.
///
/// # Examples
///
/// ```
/// use veil::domain::RecordId;
///
/// let id = RecordId::generate();
/// assert!(id.as_str().starts_with("PHI-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh, collision-resistant record identifier
    pub fn generate() -> Self {
        Self(format!("{}{}", RECORD_ID_PREFIX, Uuid::new_v4().simple()))
    }

    /// Creates a RecordId from an existing identifier string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or blank.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Record ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the record ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Blob storage key newtype wrapper
///
/// An opaque key chosen by the core for the cleansed-document blob.
/// Keys are namespaced under `deidentified/` to keep them distinct from
/// any raw-input staging keys, and are unique per record: a key is
/// written exactly once and never reused.
///
/// # Examples
///
/// ```
/// use veil::domain::{BlobKey, RecordId};
///
/// let id = RecordId::new("PHI-123").unwrap();
/// let key = BlobKey::deidentified(&id, "visit note.txt");
/// assert_eq!(key.as_str(), "deidentified/PHI-123-visit_note.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobKey(String);

impl BlobKey {
    /// Creates a BlobKey from an existing key string
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or blank.
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err("Blob key cannot be empty".to_string());
        }
        Ok(Self(key))
    }

    /// Builds the namespaced key for a cleansed document
    ///
    /// The record id makes the key unique; the sanitized source name is
    /// kept as a human-readable suffix.
    pub fn deidentified(record_id: &RecordId, source_name: &str) -> Self {
        let sanitized = sanitize_name(source_name);
        if sanitized.is_empty() {
            Self(format!("{}{}", DEIDENTIFIED_PREFIX, record_id.as_str()))
        } else {
            Self(format!(
                "{}{}-{}",
                DEIDENTIFIED_PREFIX,
                record_id.as_str(),
                sanitized
            ))
        }
    }

    /// Returns the blob key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the final path segment of the key
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlobKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BlobKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Replaces characters that are unsafe in storage keys with underscores
fn sanitize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut last_was_underscore = false;
    for c in name.trim().chars() {
        if c.is_alphanumeric() || c == '.' || c == '-' {
            result.push(c);
            last_was_underscore = false;
        } else if !last_was_underscore {
            result.push('_');
            last_was_underscore = true;
        }
    }
    result.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_generation_has_prefix() {
        let id = RecordId::generate();
        assert!(id.as_str().starts_with("PHI-"));
        assert!(id.as_str().len() > "PHI-".len());
    }

    #[test]
    fn test_record_id_generation_is_unique() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_id_empty_fails() {
        assert!(RecordId::new("").is_err());
        assert!(RecordId::new("   ").is_err());
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new("PHI-test").unwrap();
        assert_eq!(format!("{}", id), "PHI-test");
    }

    #[test]
    fn test_record_id_from_str() {
        let id: RecordId = "PHI-abc123".parse().unwrap();
        assert_eq!(id.as_str(), "PHI-abc123");
    }

    #[test]
    fn test_blob_key_deidentified_namespace() {
        let id = RecordId::new("PHI-42").unwrap();
        let key = BlobKey::deidentified(&id, "note.txt");
        assert_eq!(key.as_str(), "deidentified/PHI-42-note.txt");
    }

    #[test]
    fn test_blob_key_sanitizes_source_name() {
        let id = RecordId::new("PHI-42").unwrap();
        let key = BlobKey::deidentified(&id, "clinic visit (draft).txt");
        assert_eq!(key.as_str(), "deidentified/PHI-42-clinic_visit_draft_.txt");
    }

    #[test]
    fn test_blob_key_empty_source_name() {
        let id = RecordId::new("PHI-42").unwrap();
        let key = BlobKey::deidentified(&id, "");
        assert_eq!(key.as_str(), "deidentified/PHI-42");
    }

    #[test]
    fn test_blob_key_empty_fails() {
        assert!(BlobKey::new("").is_err());
    }

    #[test]
    fn test_blob_key_file_name() {
        let key = BlobKey::new("deidentified/PHI-42-note.txt").unwrap();
        assert_eq!(key.file_name(), "PHI-42-note.txt");
    }

    #[test]
    fn test_blob_key_serialization() {
        let key = BlobKey::new("deidentified/PHI-42").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let deserialized: BlobKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }
}
