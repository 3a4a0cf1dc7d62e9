//! Extraction step
//!
//! Reachability check first, then the bulk fetch. No retry: a failed ping
//! or an empty collection ends the run.

use crate::adapters::source::ListingSource;
use crate::domain::{RawListing, ReportError, Result};

/// Pings the source, then fetches every listing
///
/// # Errors
///
/// - [`ReportError::Connection`] if the ping fails
/// - [`ReportError::Query`] if the fetch fails
/// - [`ReportError::DataAvailability`] if the fetch returns no document
pub async fn extract_listings(source: &dyn ListingSource) -> Result<Vec<RawListing>> {
    source.ping().await?;

    let listings = source.fetch_all().await?;
    if listings.is_empty() {
        return Err(ReportError::DataAvailability(format!(
            "No documents returned by {}. Check database, collection and field names",
            source.describe()
        )));
    }

    tracing::info!(count = listings.len(), "Listings fetched");
    Ok(listings)
}
