//! Reidentify command implementation

use super::redact::exit_code_for;
use crate::adapters::factory;
use crate::config::VeilConfig;
use crate::core::ReidentificationPipeline;
use crate::domain::RecordId;
use clap::Args;

/// Arguments for the reidentify command
#[derive(Args, Debug)]
pub struct ReidentifyArgs {
    /// Record identifier returned by `veil redact`
    pub record_id: String,

    /// Write the reconstructed document here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl ReidentifyArgs {
    /// Execute the reidentify command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match VeilConfig::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let record_id = match RecordId::new(self.record_id.as_str()) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("❌ Invalid record id: {e}");
                return Ok(3);
            }
        };

        let pipeline = ReidentificationPipeline::new(
            factory::create_blob_store(&config),
            factory::create_record_store(&config),
            factory::create_key_store(&config),
        );

        match pipeline.reidentify(&record_id).await {
            Ok(document) => match &self.output {
                Some(path) => {
                    if let Err(e) = tokio::fs::write(path, &document).await {
                        eprintln!("❌ Failed to write {path}: {e}");
                        return Ok(1);
                    }
                    println!("✅ Reconstructed document written to {path}");
                    Ok(0)
                }
                None => {
                    print!("{document}");
                    Ok(0)
                }
            },
            Err(e) => {
                eprintln!("❌ Re-identification failed: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
