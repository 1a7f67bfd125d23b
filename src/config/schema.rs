//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `veil.toml` file.

use serde::{Deserialize, Serialize};

/// Detector implementation selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Built-in regex detector for free-text clinical notes
    #[default]
    Regex,
}

/// Main Veil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VeilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Storage locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Detector settings
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VeilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.storage.validate()?;
        self.detector.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Storage locations for blobs and records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the blob store
    #[serde(default = "default_blob_root")]
    pub blob_root: String,

    /// Directory of the record store
    #[serde(default = "default_record_root")]
    pub record_root: String,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.blob_root.trim().is_empty() {
            return Err("storage.blob_root cannot be empty".to_string());
        }
        if self.record_root.trim().is_empty() {
            return Err("storage.record_root cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            blob_root: default_blob_root(),
            record_root: default_record_root(),
        }
    }
}

/// Detector configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectorConfig {
    /// Detector implementation
    #[serde(default)]
    pub kind: DetectorKind,

    /// Vocabulary category labels to skip during detection
    /// (e.g. `["labs", "hospital"]`)
    #[serde(default)]
    pub excluded_categories: Vec<String>,

    /// Extra allergy terms to redact as list entries
    #[serde(default)]
    pub allergy_terms: Vec<String>,
}

impl DetectorConfig {
    fn validate(&self) -> Result<(), String> {
        use crate::domain::vocabulary::PlaceholderKind;
        for label in &self.excluded_categories {
            if PlaceholderKind::from_label(label).is_none() {
                return Err(format!(
                    "Unknown detector category '{label}' in excluded_categories"
                ));
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid = ["daily", "hourly"];
        if !valid.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_blob_root() -> String {
    "./veil-data/blobs".to_string()
}

fn default_record_root() -> String {
    "./veil-data/records".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(VeilConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let mut config = VeilConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_storage_root_is_rejected() {
        let mut config = VeilConfig::default();
        config.storage.blob_root = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_excluded_category_is_rejected() {
        let mut config = VeilConfig::default();
        config.detector.excluded_categories = vec!["fingerprint".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.contains("fingerprint"));
    }

    #[test]
    fn test_known_excluded_categories_pass() {
        let mut config = VeilConfig::default();
        config.detector.excluded_categories =
            vec!["labs".to_string(), "hospital".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let config: VeilConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.storage.blob_root, "./veil-data/blobs");
        assert_eq!(config.detector.kind, DetectorKind::Regex);
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
            [application]
            log_level = "debug"

            [storage]
            blob_root = "/var/lib/veil/blobs"
            record_root = "/var/lib/veil/records"

            [detector]
            kind = "regex"
            excluded_categories = ["labs"]
            allergy_terms = ["Penicillin", "Sulfa drugs"]

            [logging]
            local_enabled = true
            local_path = "/var/log/veil"
            local_rotation = "hourly"
        "#;
        let config: VeilConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.detector.allergy_terms.len(), 2);
        assert!(config.logging.local_enabled);
    }
}
