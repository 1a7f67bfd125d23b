//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your storage locations", self.output);
                println!("  2. Validate configuration: veil validate-config");
                println!("  3. De-identify a document: veil redact note.txt");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Starter configuration contents
    fn starter_config() -> &'static str {
        r#"# Veil Configuration File
# Reversible PHI de-identification for clinical text documents

[application]
log_level = "info"

[storage]
# Cleansed documents are written under blob_root/deidentified/
blob_root = "./veil-data/blobs"
# One JSON file per redaction record
record_root = "./veil-data/records"

[detector]
kind = "regex"
# Vocabulary categories to skip, by label:
# name, dob, mrn, ssn, address, phone, email, hospital, allergy, labs, account
excluded_categories = []
# Extra allergy terms to redact when they appear as list entries
allergy_terms = []

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#
    }
}
