//! Result type alias for auractl

use super::errors::AuraError;

/// Result type alias for auractl operations
///
/// Convenience alias that uses `AuraError` as the error type. Use this
/// throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, AuraError>;
