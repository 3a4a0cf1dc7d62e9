//! MongoDB integration
//!
//! - [`connection`] - connection target resolution from configuration
//! - [`client`] - driver-backed [`crate::adapters::source::ListingSource`]
//!
//! ```rust,no_run
//! use listing_reports::adapters::mongodb::{resolve_connection_target, MongoListingSource};
//! use listing_reports::adapters::source::ListingSource;
//! use listing_reports::config::schema::MongoConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoConfig::default();
//! let target = resolve_connection_target(&config)?;
//! let source = MongoListingSource::connect(&target, &config).await?;
//! source.ping().await?;
//! let listings = source.fetch_all().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod connection;

pub use client::{MongoListingSource, SERVER_SELECTION_TIMEOUT};
pub use connection::{resolve_connection_target, ConnectionTarget, TargetKind};
