//! Export run coordination
//!
//! Single-pass, single-attempt run: connect, ping, read the whole
//! collection, convert, write. The connection is released on every exit
//! path; release itself cannot mask the primary error. Any failure is
//! logged with its message and propagated to the caller.

use crate::adapters::mongo::MongoExporter;
use crate::config::AuraConfig;
use crate::core::export::convert::convert_document;
use crate::core::export::writer::write_export_file;
use crate::domain::Result;

/// Run the export end to end, returning the number of exported documents
///
/// # Errors
///
/// Returns an error if the connection, ping, read, conversion, or file
/// write fails. No retries are attempted.
pub async fn run_export(config: &AuraConfig) -> Result<usize> {
    let exporter = MongoExporter::connect(&config.mongodb).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to MongoDB");
        e
    })?;

    // Scoped acquisition: the body runs with the connection held, and the
    // release below happens on every exit path.
    let outcome = export_body(&exporter, config).await;

    exporter.shutdown().await;

    match &outcome {
        Ok(count) => {
            tracing::info!(
                count,
                output = %config.export.output_file,
                "Successfully exported documents"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
        }
    }

    outcome
}

async fn export_body(exporter: &MongoExporter, config: &AuraConfig) -> Result<usize> {
    exporter.ping().await?;

    let documents = exporter.fetch_all().await?;

    let converted = documents
        .into_iter()
        .map(convert_document)
        .collect::<Result<Vec<_>>>()?;

    write_export_file(&config.export.output_file, &converted)?;

    Ok(converted.len())
}
