//! Export file writing
//!
//! Serializes the converted document list to a UTF-8 JSON file: top-level
//! array, pretty-printed with 2-space indentation, non-ASCII characters
//! left unescaped. There is deliberately no atomic replace; a write failure
//! after partial conversion leaves no guarantee about the output file,
//! matching the single-pass contract of the exporter.

use crate::domain::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Write the converted documents as a pretty-printed JSON array
///
/// The top-level structure is always an array, even for an empty input.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_export_file(path: impl AsRef<Path>, documents: &[Value]) -> Result<()> {
    let path = path.as_ref();

    // serde_json's pretty printer indents with 2 spaces and leaves
    // non-ASCII characters unescaped.
    let json = serde_json::to_string_pretty(documents)?;
    fs::write(path, json)?;

    tracing::info!(
        output = %path.display(),
        count = documents.len(),
        "Wrote export file"
    );

    Ok(())
}
