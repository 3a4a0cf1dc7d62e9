//! Listing records
//!
//! A [`RawListing`] is what the store hands back: six loosely typed,
//! optional BSON values. A [`Listing`] is the typed, validated and enriched
//! record produced by [`crate::core::transform::clean_listings`].

use crate::domain::labels::HostCategory;
use chrono::{Datelike, NaiveDate};
use mongodb::bson::{Bson, Document};
use std::fmt;

/// Source field names, as stored in the collection
pub mod fields {
    pub const LAST_SCRAPED: &str = "last_scraped";
    pub const ROOM_TYPE: &str = "room_type";
    pub const AVAILABILITY_30: &str = "availability_30";
    pub const NUMBER_OF_REVIEWS: &str = "number_of_reviews";
    pub const HOST_IS_SUPERHOST: &str = "host_is_superhost";
    pub const NEIGHBOURHOOD_CLEANSED: &str = "neighbourhood_cleansed";

    /// Every projected field, in projection order
    pub const ALL: [&str; 6] = [
        LAST_SCRAPED,
        ROOM_TYPE,
        AVAILABILITY_30,
        NUMBER_OF_REVIEWS,
        HOST_IS_SUPERHOST,
        NEIGHBOURHOOD_CLEANSED,
    ];
}

/// Listing as fetched, before coercion
///
/// BSON `Null` and absent fields are both represented as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub last_scraped: Option<Bson>,
    pub room_type: Option<Bson>,
    pub availability_30: Option<Bson>,
    pub number_of_reviews: Option<Bson>,
    pub host_is_superhost: Option<Bson>,
    pub neighbourhood_cleansed: Option<Bson>,
}

impl RawListing {
    /// Reads the projected fields out of a document
    pub fn from_document(doc: &Document) -> Self {
        let field = |name: &str| match doc.get(name) {
            None | Some(Bson::Null) => None,
            Some(value) => Some(value.clone()),
        };

        Self {
            last_scraped: field(fields::LAST_SCRAPED),
            room_type: field(fields::ROOM_TYPE),
            availability_30: field(fields::AVAILABILITY_30),
            number_of_reviews: field(fields::NUMBER_OF_REVIEWS),
            host_is_superhost: field(fields::HOST_IS_SUPERHOST),
            neighbourhood_cleansed: field(fields::NEIGHBOURHOOD_CLEANSED),
        }
    }
}

impl From<Document> for RawListing {
    fn from(doc: Document) -> Self {
        RawListing::from_document(&doc)
    }
}

/// Calendar month bucket, displayed as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Truncates a date to its month
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Cleaned and enriched listing
///
/// Invariants: `availability_30` is in `0..=30`, `booking_rate_30d` is in
/// `[0, 1]`, `neighbourhood` is longer than two characters, is not made of
/// digits only and does not start with `[`.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub scraped_on: NaiveDate,
    /// Room type in the source vocabulary
    pub room_type: String,
    pub availability_30: u8,
    pub number_of_reviews: Option<i64>,
    pub host_category: HostCategory,
    pub neighbourhood: String,
    /// `(30 - availability_30) / 30`
    pub booking_rate_30d: f64,
    pub month: YearMonth,
    /// Room type after translation
    pub listing_type: String,
}
