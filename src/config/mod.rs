//! Configuration management
//!
//! TOML-based configuration with `${VAR}` environment substitution,
//! `VEIL_*` overrides, and validation at load time.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DetectorConfig, DetectorKind, LoggingConfig, StorageConfig, VeilConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};

impl VeilConfig {
    /// Loads and validates configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if loading or validation fails.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::domain::Result<Self> {
        loader::load_config(path)
    }
}
