//! Status command implementation
//!
//! Lists stored redaction records: id, blob key, and creation time.

use crate::adapters::factory;
use crate::adapters::RecordStore;
use crate::config::VeilConfig;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match VeilConfig::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let records = factory::create_record_store(&config);
        let (stored, unreadable) = match records.list().await {
            Ok(listed) => listed,
            Err(e) => {
                eprintln!("❌ Failed to list records: {e}");
                return Ok(1);
            }
        };

        if stored.is_empty() {
            println!("No redaction records found");
        } else {
            println!("📋 {} redaction record(s)", stored.len());
            println!();
            for record in &stored {
                println!(
                    "  {}  {}  {}",
                    record.record_id,
                    record.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    record.document_ref,
                );
            }
        }

        if unreadable > 0 {
            println!();
            println!("⚠️  {unreadable} record file(s) could not be read");
        }

        Ok(0)
    }
}
