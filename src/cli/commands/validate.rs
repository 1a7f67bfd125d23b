//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level:    {}", config.application.log_level);
        println!("  Blob Root:    {}", config.storage.blob_root);
        println!("  Record Root:  {}", config.storage.record_root);
        println!("  Detector:     {:?}", config.detector.kind);
        if !config.detector.excluded_categories.is_empty() {
            println!(
                "  Excluded:     {}",
                config.detector.excluded_categories.join(", ")
            );
        }
        if !config.detector.allergy_terms.is_empty() {
            println!(
                "  Allergy Terms: {}",
                config.detector.allergy_terms.join(", ")
            );
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        Ok(0)
    }
}
