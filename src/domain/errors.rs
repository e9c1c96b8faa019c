//! Domain error types
//!
//! This module defines the error hierarchy for auractl. All errors are
//! domain-specific and don't expose third-party driver or client types.

use thiserror::Error;

/// Main auractl error type
///
/// This is the primary error type used throughout the application.
/// Classification follows the catch-site: connectivity and read failures are
/// `Database`, conversion failures are `Serialization`, and per-probe request
/// failures never surface here at all (they are recovered locally into a
/// failed probe outcome).
#[derive(Debug, Error)]
pub enum AuraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// MongoDB connect, ping, or read errors
    #[error("Database error: {0}")]
    Database(String),

    /// HTTP client setup errors
    #[error("API error: {0}")]
    Api(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for AuraError {
    fn from(err: std::io::Error) -> Self {
        AuraError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AuraError {
    fn from(err: serde_json::Error) -> Self {
        AuraError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AuraError {
    fn from(err: toml::de::Error) -> Self {
        AuraError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<mongodb::error::Error> for AuraError {
    fn from(err: mongodb::error::Error) -> Self {
        AuraError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuraError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: AuraError = io_err.into();
        assert!(matches!(err, AuraError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: AuraError = json_err.into();
        assert!(matches!(err, AuraError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: AuraError = toml_err.into();
        assert!(matches!(err, AuraError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = AuraError::Database("unreachable".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
