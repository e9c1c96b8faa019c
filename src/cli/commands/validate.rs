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

        // load_config validates internally; a loaded config is a valid one
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  MongoDB Database: {}", config.mongodb.database);
        println!("  MongoDB Collection: {}", config.mongodb.collection);
        println!(
            "  Connect Timeout: {}s",
            config.mongodb.connect_timeout_secs
        );
        println!("  Export Output: {}", config.export.output_file);
        println!("  API Target: {}{}", config.api.base_url, config.api.path_prefix);
        println!("  Request Timeout: {}s", config.api.request_timeout_secs);
        println!();
        Ok(0)
    }
}
