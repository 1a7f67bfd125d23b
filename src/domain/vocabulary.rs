//! Placeholder vocabulary
//!
//! The fixed, ordered catalog of marker tokens a detector may emit into
//! a cleansed document. Ordering is load-bearing: removed value `i` is
//! substituted back for marker `i` at re-identification time, so the
//! order and set must match across deployments. Changing either
//! invalidates every previously stored record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PHI category covered by the placeholder vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    /// Patient or provider names
    Name,
    /// Date of birth
    DateOfBirth,
    /// Medical record number
    MedicalRecordNumber,
    /// Social Security Number
    Ssn,
    /// Street address
    Address,
    /// Telephone number
    Phone,
    /// Email address
    Email,
    /// Hospital or facility name
    Hospital,
    /// Allergy entries
    Allergy,
    /// Lab results
    LabResults,
    /// Account number
    Account,
}

impl PlaceholderKind {
    /// All kinds in vocabulary order
    ///
    /// The index of a kind in this array is its substitution position.
    pub const ALL: [PlaceholderKind; 11] = [
        Self::Name,
        Self::DateOfBirth,
        Self::MedicalRecordNumber,
        Self::Ssn,
        Self::Address,
        Self::Phone,
        Self::Email,
        Self::Hospital,
        Self::Allergy,
        Self::LabResults,
        Self::Account,
    ];

    /// The literal marker emitted into cleansed documents
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Name => "*name*",
            Self::DateOfBirth => "*dob*",
            Self::MedicalRecordNumber => "*mrn*",
            Self::Ssn => "*ssn*",
            Self::Address => "*address*",
            Self::Phone => "*phone*",
            Self::Email => "*email*",
            Self::Hospital => "*hospital*",
            Self::Allergy => "*allergy*",
            Self::LabResults => "*labs*",
            Self::Account => "*account*",
        }
    }

    /// Short lowercase label used in configuration and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateOfBirth => "dob",
            Self::MedicalRecordNumber => "mrn",
            Self::Ssn => "ssn",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Hospital => "hospital",
            Self::Allergy => "allergy",
            Self::LabResults => "labs",
            Self::Account => "account",
        }
    }

    /// The substitution position of this kind in the vocabulary
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::DateOfBirth => 1,
            Self::MedicalRecordNumber => 2,
            Self::Ssn => 3,
            Self::Address => 4,
            Self::Phone => 5,
            Self::Email => 6,
            Self::Hospital => 7,
            Self::Allergy => 8,
            Self::LabResults => 9,
            Self::Account => 10,
        }
    }

    /// Looks up a kind by its configuration label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.label() == label)
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The number of markers in the vocabulary
pub const VOCABULARY_SIZE: usize = PlaceholderKind::ALL.len();

/// Returns the ordered marker list
pub fn markers() -> [&'static str; VOCABULARY_SIZE] {
    PlaceholderKind::ALL.map(|kind| kind.marker())
}
