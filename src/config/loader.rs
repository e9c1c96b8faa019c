//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AuraConfig;
use crate::config::secret_string;
use crate::domain::errors::AuraError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AuraConfig
/// 4. Applies environment variable overrides (AURACTL_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<AuraConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AuraError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AuraError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AuraConfig = toml::from_str(&contents)
        .map_err(|e| AuraError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        AuraError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are passed through untouched so that documentation examples
/// in the config file never fail substitution.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid placeholder regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AuraError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the AURACTL_* prefix
///
/// Environment variables follow the pattern: AURACTL_<SECTION>_<KEY>
/// For example: AURACTL_MONGODB_DATABASE, AURACTL_API_BASE_URL
fn apply_env_overrides(config: &mut AuraConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("AURACTL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // MongoDB overrides
    if let Ok(val) = std::env::var("AURACTL_MONGODB_URI") {
        config.mongodb.uri = secret_string(val);
    }
    if let Ok(val) = std::env::var("AURACTL_MONGODB_DATABASE") {
        config.mongodb.database = val;
    }
    if let Ok(val) = std::env::var("AURACTL_MONGODB_COLLECTION") {
        config.mongodb.collection = val;
    }
    if let Ok(val) = std::env::var("AURACTL_MONGODB_CONNECT_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.mongodb.connect_timeout_secs = secs;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("AURACTL_EXPORT_OUTPUT_FILE") {
        config.export.output_file = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("AURACTL_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("AURACTL_API_PATH_PREFIX") {
        config.api.path_prefix = val;
    }
    if let Ok(val) = std::env::var("AURACTL_API_REQUEST_TIMEOUT_SECS") {
        if let Ok(secs) = val.parse() {
            config.api.request_timeout_secs = secs;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("AURACTL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("AURACTL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
