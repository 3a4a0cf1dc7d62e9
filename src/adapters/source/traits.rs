//! Listing source abstraction
//!
//! The extractor only needs two operations from the store: a cheap
//! reachability check and a bulk fetch. Keeping them behind a trait lets
//! the pipeline run against an in-memory source in tests.

use crate::domain::{RawListing, Result};
use async_trait::async_trait;

/// Read-only source of raw listings
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Short description of the source for logs (never includes secrets)
    fn describe(&self) -> String;

    /// Verify the store is reachable
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ReportError::Connection`] on timeout,
    /// authentication failure or network error.
    async fn ping(&self) -> Result<()>;

    /// Fetch every listing of the collection with the fixed projection
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ReportError::Query`] if the query or the
    /// cursor fails.
    async fn fetch_all(&self) -> Result<Vec<RawListing>>;
}
