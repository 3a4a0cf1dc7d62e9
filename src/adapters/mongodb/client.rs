//! MongoDB client implementation
//!
//! This module provides the [`ListingSource`] backed by a MongoDB
//! collection.

use super::connection::ConnectionTarget;
use crate::adapters::source::ListingSource;
use crate::config::schema::MongoConfig;
use crate::domain::listing::fields;
use crate::domain::{RawListing, ReportError, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::Client;
use std::time::Duration;

/// Server selection timeout, bounds the reachability check
pub const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Name reported to the server in the connection handshake
const APP_NAME: &str = "listing-reports";

/// MongoDB listing source
///
/// Holds a driver client bound to one database and one collection.
pub struct MongoListingSource {
    client: Client,
    database: String,
    collection: String,
    target: String,
}

impl MongoListingSource {
    /// Create a new MongoDB source
    ///
    /// Only parses the connection string and builds the client; the driver
    /// connects lazily, so reachability is checked by [`ListingSource::ping`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Connection`] if the connection string cannot
    /// be parsed or resolved (SRV lookups happen here).
    pub async fn connect(target: &ConnectionTarget, config: &MongoConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(target.expose_uri())
            .await
            .map_err(|e| {
                ReportError::Connection(format!(
                    "Invalid MongoDB connection string {}: {}",
                    target.redacted(),
                    e
                ))
            })?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options).map_err(|e| {
            ReportError::Connection(format!("Failed to create MongoDB client: {e}"))
        })?;

        tracing::debug!(
            uri = %target.redacted(),
            database = %config.database,
            collection = %config.collection,
            "MongoDB client created"
        );

        Ok(Self {
            client,
            database: config.database.clone(),
            collection: config.collection.clone(),
            target: target.redacted().to_string(),
        })
    }
}

/// Projection applied to the bulk fetch: the six listing fields, no `_id`
pub fn listing_projection() -> Document {
    let mut projection = doc! { "_id": 0 };
    for field in fields::ALL {
        projection.insert(field, 1);
    }
    projection
}

#[async_trait]
impl ListingSource for MongoListingSource {
    fn describe(&self) -> String {
        format!(
            "mongodb {} (database={}, collection={})",
            self.target, self.database, self.collection
        )
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                ReportError::Connection(format!(
                    "MongoDB ping failed on {}: {}",
                    self.target, e
                ))
            })?;

        tracing::info!(
            database = %self.database,
            collection = %self.collection,
            "MongoDB connection OK"
        );
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<RawListing>> {
        let collection = self
            .client
            .database(&self.database)
            .collection::<Document>(&self.collection);

        let options = FindOptions::builder()
            .projection(listing_projection())
            .build();

        let cursor = collection.find(None, options).await.map_err(|e| {
            ReportError::Query(format!(
                "Failed to query {}.{}: {}",
                self.database, self.collection, e
            ))
        })?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(|e| {
            ReportError::Query(format!(
                "Failed to read documents from {}.{}: {}",
                self.database, self.collection, e
            ))
        })?;

        Ok(documents.into_iter().map(RawListing::from).collect())
    }
}
