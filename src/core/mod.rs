//! Business logic for the reversible-redaction protocol.
//!
//! This module contains the two orchestrating pipelines and the
//! substitution routine they share:
//!
//! - [`redaction`] - de-identify a document and persist the mapping
//! - [`reidentification`] - reverse a redaction by record id
//! - [`substitution`] - positional placeholder substitution

pub mod redaction;
pub mod reidentification;
pub mod substitution;

pub use redaction::{RedactionOutcome, RedactionPipeline};
pub use reidentification::ReidentificationPipeline;
pub use substitution::restore_placeholders;
