//! Cleaning and enrichment of raw listings
//!
//! Each raw listing goes through a single validation step which either
//! yields a typed, enriched [`Listing`] or a [`Rejection`]. Rejected rows
//! are dropped and counted; they never surface as errors.

use super::coerce::{coerce_date, coerce_int, coerce_string};
use crate::domain::listing::fields;
use crate::domain::{HostCategory, Listing, RawListing, ReportLanguage, YearMonth};
use std::fmt;

/// Upper bound of the 30-day availability window
pub const AVAILABILITY_WINDOW_DAYS: u8 = 30;

/// Reason a raw listing was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A mandatory field is absent, null, or could not be coerced
    MissingField(&'static str),
    /// `availability_30` outside `0..=30`
    AvailabilityOutOfRange(i64),
    /// Neighbourhood of two characters or fewer, `[`-prefixed or all digits
    MalformedNeighbourhood,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingField(field) => write!(f, "missing or invalid {field}"),
            Rejection::AvailabilityOutOfRange(value) => {
                write!(f, "availability_30 out of range: {value}")
            }
            Rejection::MalformedNeighbourhood => write!(f, "malformed neighbourhood"),
        }
    }
}

/// Number of dropped listings per reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub missing_field: usize,
    pub availability_out_of_range: usize,
    pub malformed_neighbourhood: usize,
}

impl RejectionCounts {
    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::MissingField(_) => self.missing_field += 1,
            Rejection::AvailabilityOutOfRange(_) => self.availability_out_of_range += 1,
            Rejection::MalformedNeighbourhood => self.malformed_neighbourhood += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_field + self.availability_out_of_range + self.malformed_neighbourhood
    }
}

/// Output of [`clean_listings`]
#[derive(Debug, Clone, Default)]
pub struct CleanedListings {
    pub listings: Vec<Listing>,
    pub rejections: RejectionCounts,
}

/// Cleans a batch of raw listings
///
/// Input order is preserved among the surviving listings.
pub fn clean_listings(raw: Vec<RawListing>, language: ReportLanguage) -> CleanedListings {
    let mut cleaned = CleanedListings {
        listings: Vec::with_capacity(raw.len()),
        rejections: RejectionCounts::default(),
    };

    for listing in &raw {
        match validate_listing(listing, language) {
            Ok(listing) => cleaned.listings.push(listing),
            Err(rejection) => {
                tracing::trace!(reason = %rejection, "Listing rejected");
                cleaned.rejections.record(&rejection);
            }
        }
    }

    cleaned
}

/// Validates and enriches one raw listing
///
/// Steps, in order: coerce every field, require the mandatory ones, check
/// the availability range, check the neighbourhood format, then derive the
/// booking rate, month bucket, host category and translated listing type.
pub fn validate_listing(raw: &RawListing, language: ReportLanguage) -> Result<Listing, Rejection> {
    let scraped_on = raw.last_scraped.as_ref().and_then(coerce_date);
    let room_type = raw.room_type.as_ref().and_then(coerce_string);
    let availability = raw.availability_30.as_ref().and_then(coerce_int);
    let number_of_reviews = raw.number_of_reviews.as_ref().and_then(coerce_int);
    let superhost_flag = raw.host_is_superhost.as_ref().and_then(coerce_string);
    let neighbourhood = raw.neighbourhood_cleansed.as_ref().and_then(coerce_string);

    let scraped_on = scraped_on.ok_or(Rejection::MissingField(fields::LAST_SCRAPED))?;
    let room_type = room_type.ok_or(Rejection::MissingField(fields::ROOM_TYPE))?;
    let availability = availability.ok_or(Rejection::MissingField(fields::AVAILABILITY_30))?;
    let neighbourhood =
        neighbourhood.ok_or(Rejection::MissingField(fields::NEIGHBOURHOOD_CLEANSED))?;

    let availability_30 = u8::try_from(availability)
        .ok()
        .filter(|days| *days <= AVAILABILITY_WINDOW_DAYS)
        .ok_or(Rejection::AvailabilityOutOfRange(availability))?;

    if !is_valid_neighbourhood(&neighbourhood) {
        return Err(Rejection::MalformedNeighbourhood);
    }

    let listing_type = language.translate_room_type(&room_type).to_string();

    Ok(Listing {
        scraped_on,
        booking_rate_30d: booking_rate_30d(availability_30),
        month: YearMonth::of(scraped_on),
        host_category: HostCategory::from_flag(superhost_flag.as_deref()),
        listing_type,
        room_type,
        availability_30,
        number_of_reviews,
        neighbourhood,
    })
}

/// Rejects placeholder neighbourhood values
///
/// A valid name has more than two characters, does not start with `[` and
/// is not made of digits only, in any script.
pub fn is_valid_neighbourhood(name: &str) -> bool {
    name.chars().count() > 2
        && !name.starts_with('[')
        && !name.chars().all(char::is_numeric)
}

/// Share of the 30-day window that is booked
pub fn booking_rate_30d(availability_30: u8) -> f64 {
    let window = f64::from(AVAILABILITY_WINDOW_DAYS);
    (window - f64::from(availability_30)) / window
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mongodb::bson::Bson;
    use test_case::test_case;

    fn raw(availability: i32, neighbourhood: &str) -> RawListing {
        RawListing {
            last_scraped: Some(Bson::String("2024-03-15".to_string())),
            room_type: Some(Bson::String("Entire home/apt".to_string())),
            availability_30: Some(Bson::Int32(availability)),
            number_of_reviews: Some(Bson::Int32(8)),
            host_is_superhost: Some(Bson::String("t".to_string())),
            neighbourhood_cleansed: Some(Bson::String(neighbourhood.to_string())),
        }
    }

    #[test]
    fn test_valid_listing_is_enriched() {
        let listing = validate_listing(&raw(10, "Opéra"), ReportLanguage::Fr).unwrap();

        assert_eq!(listing.scraped_on, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(listing.month.to_string(), "2024-03");
        assert_eq!(listing.availability_30, 10);
        assert!((listing.booking_rate_30d - 20.0 / 30.0).abs() < 1e-12);
        assert_eq!(listing.room_type, "Entire home/apt");
        assert_eq!(listing.listing_type, "Logement entier");
        assert_eq!(listing.host_category, HostCategory::Superhost);
        assert_eq!(listing.number_of_reviews, Some(8));
    }

    #[test]
    fn test_english_keeps_source_room_type() {
        let listing = validate_listing(&raw(0, "Opéra"), ReportLanguage::En).unwrap();
        assert_eq!(listing.listing_type, "Entire home/apt");
        assert_eq!(listing.booking_rate_30d, 1.0);
    }

    #[test_case(-1 ; "negative")]
    #[test_case(31 ; "just above window")]
    #[test_case(35 ; "above window")]
    fn test_availability_out_of_range(availability: i32) {
        assert_eq!(
            validate_listing(&raw(availability, "Opéra"), ReportLanguage::Fr),
            Err(Rejection::AvailabilityOutOfRange(i64::from(availability)))
        );
    }

    #[test_case(0 ; "lower bound")]
    #[test_case(30 ; "upper bound")]
    fn test_availability_bounds_accepted(availability: i32) {
        assert!(validate_listing(&raw(availability, "Opéra"), ReportLanguage::Fr).is_ok());
    }

    #[test_case("75" ; "two characters")]
    #[test_case("" ; "empty")]
    #[test_case("[Paris]" ; "bracket prefixed")]
    #[test_case("75011" ; "all digits")]
    #[test_case("٧٥٠" ; "all arabic-indic digits")]
    #[test_case("７５０" ; "all fullwidth digits")]
    fn test_malformed_neighbourhood(name: &str) {
        assert_eq!(
            validate_listing(&raw(5, name), ReportLanguage::Fr),
            Err(Rejection::MalformedNeighbourhood)
        );
    }

    #[test_case("Gobelins" ; "plain")]
    #[test_case("Île" ; "three characters with accent")]
    #[test_case("75e arr." ; "digits and letters")]
    #[test_case("Paris [centre]" ; "bracket inside")]
    fn test_valid_neighbourhood(name: &str) {
        assert!(is_valid_neighbourhood(name));
    }

    #[test_case("2024-04-01T01:00:00+02:00", "2024-04" ; "offset ahead of utc")]
    #[test_case("2024-03-31T22:00:00-03:00", "2024-03" ; "offset behind utc")]
    fn test_month_is_truncation_of_written_date(scraped: &str, month: &str) {
        let mut listing = raw(5, "Opéra");
        listing.last_scraped = Some(Bson::String(scraped.to_string()));

        let listing = validate_listing(&listing, ReportLanguage::Fr).unwrap();
        assert_eq!(listing.month.to_string(), month);
    }

    #[test]
    fn test_missing_mandatory_fields() {
        let mut listing = raw(5, "Opéra");
        listing.last_scraped = Some(Bson::String("not a date".to_string()));
        assert_eq!(
            validate_listing(&listing, ReportLanguage::Fr),
            Err(Rejection::MissingField(fields::LAST_SCRAPED))
        );

        let mut listing = raw(5, "Opéra");
        listing.room_type = None;
        assert_eq!(
            validate_listing(&listing, ReportLanguage::Fr),
            Err(Rejection::MissingField(fields::ROOM_TYPE))
        );

        let mut listing = raw(5, "Opéra");
        listing.availability_30 = Some(Bson::String("many".to_string()));
        assert_eq!(
            validate_listing(&listing, ReportLanguage::Fr),
            Err(Rejection::MissingField(fields::AVAILABILITY_30))
        );

        let mut listing = raw(5, "Opéra");
        listing.neighbourhood_cleansed = None;
        assert_eq!(
            validate_listing(&listing, ReportLanguage::Fr),
            Err(Rejection::MissingField(fields::NEIGHBOURHOOD_CLEANSED))
        );
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let mut listing = raw(5, "Opéra");
        listing.number_of_reviews = None;
        listing.host_is_superhost = None;

        let listing = validate_listing(&listing, ReportLanguage::Fr).unwrap();
        assert_eq!(listing.number_of_reviews, None);
        assert_eq!(listing.host_category, HostCategory::NonSuperhost);
    }

    #[test]
    fn test_clean_listings_counts_rejections() {
        let batch = vec![
            raw(35, "Opéra"),
            raw(10, "Opéra"),
            raw(10, "12"),
            RawListing::default(),
        ];

        let cleaned = clean_listings(batch, ReportLanguage::Fr);
        assert_eq!(cleaned.listings.len(), 1);
        assert_eq!(cleaned.listings[0].availability_30, 10);
        assert_eq!(
            cleaned.rejections,
            RejectionCounts {
                missing_field: 1,
                availability_out_of_range: 1,
                malformed_neighbourhood: 1,
            }
        );
        assert_eq!(cleaned.rejections.total(), 3);
    }

    #[test]
    fn test_booking_rate_range() {
        for days in 0..=AVAILABILITY_WINDOW_DAYS {
            let rate = booking_rate_30d(days);
            assert!((0.0..=1.0).contains(&rate));
        }
    }
}
