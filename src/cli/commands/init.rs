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
    #[arg(short, long, default_value = "auractl.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing auractl configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Export AURACTL_MONGODB_URI with your connection string");
                println!("     (never commit the connection string to the config file)");
                println!("  3. Validate configuration: auractl validate-config");
                println!("  4. Run an export: auractl export");
                println!("  5. Probe the API: auractl probe");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# auractl configuration file
# EbookAura operations toolkit

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[mongodb]
# Connection string - keep this in the environment, not in the file
uri = "${AURACTL_MONGODB_URI}"

# Database and collection to export
database = "test"
collection = "books"

# Connection establishment timeout in seconds
connect_timeout_secs = 5

[export]
# Output file for the exported collection
output_file = "books.json"

[api]
# Base URL of the EbookAura deployment (no trailing slash)
base_url = "https://ebookaura.onrender.com"

# Versioned path prefix prepended to every probe path
path_prefix = "/api"

# Per-request timeout in seconds
request_timeout_secs = 30

[logging]
# Enable local file logging
local_enabled = false
local_path = "/var/log/auractl"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }
}
