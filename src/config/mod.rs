//! Configuration management for auractl.
//!
//! TOML-based configuration loading, parsing, and validation with support
//! for environment variable substitution (`${VAR_NAME}`), `AURACTL_*`
//! overrides, default values, and type-safe configuration structs.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [mongodb]
//! uri = "${AURACTL_MONGODB_URI}"
//! database = "test"
//! collection = "books"
//!
//! [export]
//! output_file = "books.json"
//!
//! [api]
//! base_url = "https://ebookaura.onrender.com"
//! path_prefix = "/api"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApiConfig, ApplicationConfig, AuraConfig, ExportConfig, LoggingConfig, MongoConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
