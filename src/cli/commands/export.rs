//! Export command implementation
//!
//! Exports the configured MongoDB collection to a JSON file.

use crate::config::load_config;
use crate::core::export::run_export;
use crate::domain::AuraError;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Override the output file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the database name
    #[arg(long)]
    pub database: Option<String>,

    /// Override the collection name
    #[arg(long)]
    pub collection: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output file from CLI");
            config.export.output_file = output.clone();
        }
        if let Some(database) = &self.database {
            config.mongodb.database = database.clone();
        }
        if let Some(collection) = &self.collection {
            config.mongodb.collection = collection.clone();
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Export Configuration:");
            println!("  Database: {}", config.mongodb.database);
            println!("  Collection: {}", config.mongodb.collection);
            println!("  Output: {}", config.export.output_file);
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        println!("🚀 Starting export...");
        match run_export(&config).await {
            Ok(count) => {
                println!();
                println!("✅ Exported {count} documents to {}", config.export.output_file);
                Ok(0)
            }
            Err(e @ AuraError::Database(_)) => {
                eprintln!("Export failed: {e}");
                Ok(4) // Connection error exit code
            }
            Err(e) => {
                eprintln!("Export failed: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            yes: false,
            output: None,
            database: None,
            collection: None,
        };

        assert!(!args.yes);
        assert!(args.output.is_none());
        assert!(args.database.is_none());
        assert!(args.collection.is_none());
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            yes: true,
            output: Some("dump.json".to_string()),
            database: Some("test".to_string()),
            collection: Some("books".to_string()),
        };

        assert!(args.yes);
        assert_eq!(args.output, Some("dump.json".to_string()));
        assert_eq!(args.collection, Some("books".to_string()));
    }
}
