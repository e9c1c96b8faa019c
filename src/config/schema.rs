//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `auractl.toml` file.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Main auractl configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuraConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// MongoDB connection settings (used by the export command)
    pub mongodb: MongoConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// EbookAura API settings (used by the probe command)
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AuraConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.mongodb.validate()?;
        self.export.validate()?;
        self.api.validate()?;
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

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
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

/// MongoDB connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// Connection string (use environment variable substitution, never a literal)
    pub uri: SecretString,

    /// Database name
    pub database: String,

    /// Collection to export
    pub collection: String,

    /// Connection establishment / server selection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl MongoConfig {
    fn validate(&self) -> Result<(), String> {
        let uri = self.uri.expose_secret();
        if !uri.starts_with("mongodb://") && !uri.starts_with("mongodb+srv://") {
            return Err(
                "mongodb.uri must start with 'mongodb://' or 'mongodb+srv://'".to_string(),
            );
        }
        if self.database.trim().is_empty() {
            return Err("mongodb.database cannot be empty".to_string());
        }
        if self.collection.trim().is_empty() {
            return Err("mongodb.collection cannot be empty".to_string());
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 300 {
            return Err(format!(
                "mongodb.connect_timeout_secs must be between 1 and 300, got {}",
                self.connect_timeout_secs
            ));
        }
        Ok(())
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Path of the JSON file the exported collection is written to
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_file.trim().is_empty() {
            return Err("export.output_file cannot be empty".to_string());
        }
        Ok(())
    }
}

/// EbookAura API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API host, without the version prefix
    pub base_url: String,

    /// Versioned path prefix appended to the base URL for every probe
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.base_url.ends_with('/') {
            return Err("api.base_url must not end with '/'".to_string());
        }
        if !self.path_prefix.starts_with('/') {
            return Err(format!(
                "api.path_prefix must start with '/', got '{}'",
                self.path_prefix
            ));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 600 {
            return Err(format!(
                "api.request_timeout_secs must be between 1 and 600, got {}",
                self.request_timeout_secs
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_max_size_mb")]
    pub local_max_size_mb: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
            local_max_size_mb: default_max_size_mb(),
        }
    }
}

impl LoggingConfig {
    /// Console-only logging, used by the CLI entry point before any
    /// configuration file has been loaded.
    pub fn console_only() -> Self {
        Self {
            local_enabled: false,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_output_file() -> String {
    "books.json".to_string()
}

fn default_path_prefix() -> String {
    "/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_path() -> String {
    "/var/log/auractl".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_max_size_mb() -> u64 {
    100
}
