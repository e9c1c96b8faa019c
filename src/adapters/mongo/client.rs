//! MongoDB export client
//!
//! Thin wrapper around the MongoDB driver that owns the connection for the
//! duration of a single export run. Acquisition, liveness check, full
//! collection read, and release are the only operations; there are no
//! retries and no pagination.

use crate::config::MongoConfig;
use crate::domain::{AuraError, Result};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::Client;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Exclusively-owned MongoDB connection for one export run
pub struct MongoExporter {
    client: Client,
    database: String,
    collection: String,
}

impl MongoExporter {
    /// Establish a connection handle from configuration
    ///
    /// The connection-establishment and server-selection timeouts are both
    /// bounded by `connect_timeout_secs`; actual I/O is deferred until the
    /// first operation, so callers must [`ping`](Self::ping) before reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed or the
    /// client cannot be constructed.
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);

        let mut options = ClientOptions::parse(config.uri.expose_secret().as_ref())
            .await
            .map_err(|e| {
                AuraError::Database(format!("Invalid MongoDB connection string: {e}"))
            })?;
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);
        options.app_name = Some("auractl".to_string());

        let client = Client::with_options(options)
            .map_err(|e| AuraError::Database(format!("Failed to build MongoDB client: {e}")))?;

        Ok(Self {
            client,
            database: config.database.clone(),
            collection: config.collection.clone(),
        })
    }

    /// Verify liveness with an explicit ping before any read
    ///
    /// # Errors
    ///
    /// Returns an error if the server does not answer the ping within the
    /// configured server-selection timeout.
    pub async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AuraError::Database(format!("MongoDB ping failed: {e}")))?;

        tracing::info!(database = %self.database, "Successfully connected to MongoDB");
        Ok(())
    }

    /// Read the entire target collection into memory
    ///
    /// No filter, no projection, no pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or cursor iteration fails.
    pub async fn fetch_all(&self) -> Result<Vec<Document>> {
        let collection = self
            .client
            .database(&self.database)
            .collection::<Document>(&self.collection);

        let mut cursor = collection.find(doc! {}).await.map_err(|e| {
            AuraError::Database(format!(
                "Failed to query collection '{}': {e}",
                self.collection
            ))
        })?;

        let mut documents = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AuraError::Database(format!("Failed to read cursor: {e}")))?
        {
            documents.push(document);
        }

        tracing::info!(
            collection = %self.collection,
            count = documents.len(),
            "Fetched all documents from collection"
        );

        Ok(documents)
    }

    /// Release the connection
    ///
    /// Best-effort cleanup; the driver's shutdown cannot fail and therefore
    /// never masks a primary error from the export body.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}
