//! Redact command implementation

use crate::adapters::factory;
use crate::config::VeilConfig;
use crate::core::RedactionPipeline;
use crate::domain::VeilError;
use clap::Args;
use std::path::Path;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Path to the document to de-identify
    pub input: String,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match VeilConfig::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let input_path = Path::new(&self.input);
        let document = match tokio::fs::read_to_string(input_path).await {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ Failed to read {}: {e}", input_path.display());
                return Ok(1);
            }
        };

        let source_name = input_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.txt");

        let detector = match factory::create_detector(&config) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let pipeline = RedactionPipeline::new(
            detector,
            factory::create_blob_store(&config),
            factory::create_record_store(&config),
            factory::create_key_store(&config),
        );

        match pipeline.redact(&document, source_name).await {
            Ok(outcome) => {
                println!("✅ Document de-identified and stored");
                println!();
                println!("  Record ID:      {}", outcome.record_id);
                println!("  Document key:   {}", outcome.document_ref);
                println!("  Values removed: {}", outcome.removed_count);
                println!();
                println!("Re-identify later with: veil reidentify {}", outcome.record_id);
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ Redaction failed: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}

/// Maps error kinds to distinct exit codes so scripts can branch on them
pub(crate) fn exit_code_for(err: &VeilError) -> i32 {
    match err {
        VeilError::Configuration(_) => 2,
        VeilError::InvalidInput(_) => 3,
        VeilError::RecordNotFound(_) => 4,
        VeilError::DetectionFailed(_)
        | VeilError::StorageUnavailable(_)
        | VeilError::DocumentUnavailable(_)
        | VeilError::IncompleteRecord(_)
        | VeilError::Decryption(_)
        | VeilError::Crypto(_)
        | VeilError::Serialization(_)
        | VeilError::Io(_)
        | VeilError::Other(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_caller_errors() {
        assert_eq!(
            exit_code_for(&VeilError::Configuration("x".to_string())),
            2
        );
        assert_eq!(exit_code_for(&VeilError::InvalidInput("x".to_string())), 3);
        assert_eq!(
            exit_code_for(&VeilError::RecordNotFound("x".to_string())),
            4
        );
        assert_eq!(
            exit_code_for(&VeilError::StorageUnavailable("x".to_string())),
            1
        );
    }
}
