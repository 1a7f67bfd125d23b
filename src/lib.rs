// Veil - Reversible PHI De-identification Tool
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - Reversible PHI De-identification
//!
//! Veil strips personally-identifying information from clinical text
//! documents, stores the cleansed document together with an encrypted
//! record of what was removed, and can reverse the process to recover
//! the original content given a record identifier.
//!
//! ## Overview
//!
//! The core of the library is the reversible-redaction protocol:
//!
//! - **Redaction** replaces detected PII spans with fixed placeholder
//!   markers (`*name*`, `*dob*`, ...) and encrypts the ordered list of
//!   removed values into a single authenticated token.
//! - **Storage** binds a record identifier to the cleansed-document
//!   blob key, the encrypted payload, and the per-record key.
//! - **Re-identification** decrypts the payload and substitutes the
//!   values back in strict positional order.
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (redaction, re-identification, substitution)
//! - [`adapters`] - Collaborator seams (detector, blob store, record store, key store)
//! - [`crypto`] - The crypto envelope over the removed-values list
//! - [`domain`] - Core domain types and the placeholder vocabulary
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veil::adapters::factory;
//! use veil::config::VeilConfig;
//! use veil::core::{RedactionPipeline, ReidentificationPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VeilConfig::from_file("veil.toml")?;
//!
//!     let pipeline = RedactionPipeline::new(
//!         factory::create_detector(&config)?,
//!         factory::create_blob_store(&config),
//!         factory::create_record_store(&config),
//!         factory::create_key_store(&config),
//!     );
//!
//!     let outcome = pipeline
//!         .redact("Patient: Jane Doe\nSeen today.", "note.txt")
//!         .await?;
//!     println!("Stored as {}", outcome.record_id);
//!
//!     let reidentify = ReidentificationPipeline::new(
//!         factory::create_blob_store(&config),
//!         factory::create_record_store(&config),
//!         factory::create_key_store(&config),
//!     );
//!     let original = reidentify.reidentify(&outcome.record_id).await?;
//!     println!("{original}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::VeilError`], whose kinds
//! are distinguishable: a caller can tell `RecordNotFound` from
//! `DocumentUnavailable` from `Decryption` and react accordingly.
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate. Log fields
//! carry record ids and blob keys, never document contents or removed
//! values.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod domain;
pub mod logging;
