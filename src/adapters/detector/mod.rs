//! PII detection module
//!
//! Trait-based detection interface. A detector consumes a raw document
//! and emits a cleansed document plus the ordered removed-values list.
//! Concrete implementations may run local patterns, shell out, or call
//! a remote service; the pipelines never assume which.

pub mod regex;

use crate::domain::errors::DetectorError;
use async_trait::async_trait;

pub use self::regex::RegexDetector;

/// Result of a detection pass
///
/// `removed_values[i]` is the value consumed by vocabulary marker `i`,
/// so re-identification can substitute positionally. A detector that
/// consumed marker `k` but not some earlier marker `j < k` fills index
/// `j` with marker `j`'s own literal text, which substitutes back to
/// itself. Values never contain newlines (the envelope's join
/// separator) and are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorOutput {
    /// The document with detected PII replaced by vocabulary markers
    pub cleansed_document: String,

    /// Removed values, indexed by vocabulary position
    pub removed_values: Vec<String>,
}

/// Trait for PII detection implementations
#[async_trait]
pub trait Detector: Send + Sync {
    /// Detect and strip PII from a raw document
    ///
    /// # Errors
    ///
    /// Returns a [`DetectorError`]; the redaction pipeline surfaces it
    /// as `DetectionFailed` and aborts before any storage write.
    async fn detect(&self, document: &str) -> Result<DetectorOutput, DetectorError>;
}
