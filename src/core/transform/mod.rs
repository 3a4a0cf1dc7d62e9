//! Data transformation logic
//!
//! Turns loosely typed [`RawListing`](crate::domain::RawListing) records
//! into validated, enriched [`Listing`](crate::domain::Listing) records.
//!
//! - [`coerce`] - non-strict BSON to date/integer/string coercion
//! - [`clean`] - mandatory-field, range and neighbourhood checks, derived columns
//!
//! ```rust
//! use listing_reports::core::transform::clean_listings;
//! use listing_reports::domain::{RawListing, ReportLanguage};
//! use mongodb::bson::doc;
//!
//! let raw = vec![RawListing::from(doc! {
//!     "last_scraped": "2024-03-15",
//!     "room_type": "Private room",
//!     "availability_30": 10,
//!     "neighbourhood_cleansed": "Popincourt",
//! })];
//!
//! let cleaned = clean_listings(raw, ReportLanguage::Fr);
//! assert_eq!(cleaned.listings[0].listing_type, "Chambre privée");
//! ```

pub mod clean;
pub mod coerce;

pub use clean::{
    booking_rate_30d, clean_listings, is_valid_neighbourhood, validate_listing, CleanedListings,
    Rejection, RejectionCounts,
};
