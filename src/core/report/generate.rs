//! The five report computations
//!
//! Each computation is a pure function of the cleaned listings; none of
//! them depends on another's output. Grouping goes through `BTreeMap`s and
//! every sort ends on a total tie-break, so the same input always renders
//! to the same rows.

use super::aggregate::{dense_rank_descending, median, MeanAccumulator};
use super::table::{Cell, ReportKind, ReportTable};
use crate::domain::{HostCategory, Listing, ReportLanguage, YearMonth};
use std::collections::BTreeMap;

/// Options shared by the report computations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Dense-rank cutoff of the monthly leaderboard
    pub top_n: usize,
    pub language: ReportLanguage,
}

/// Report 1 row
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRateByMonthAndType {
    pub month: YearMonth,
    pub listing_type: String,
    pub mean_booking_rate: f64,
}

/// Report 3 row
#[derive(Debug, Clone, PartialEq)]
pub struct MedianReviewsByHost {
    pub host_category: HostCategory,
    pub median_reviews: Option<f64>,
}

/// Report 4 row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighbourhoodDensity {
    pub neighbourhood: String,
    pub listings: u64,
}

/// Report 5 row
#[derive(Debug, Clone, PartialEq)]
pub struct TopNeighbourhood {
    pub month: YearMonth,
    pub neighbourhood: String,
    pub mean_booking_rate: f64,
    pub rank: u32,
}

/// Mean booking rate per (month, listing type), sorted by month then type
pub fn booking_rate_by_month_and_type(listings: &[Listing]) -> Vec<BookingRateByMonthAndType> {
    let mut groups: BTreeMap<(YearMonth, &str), MeanAccumulator> = BTreeMap::new();
    for listing in listings {
        groups
            .entry((listing.month, listing.listing_type.as_str()))
            .or_default()
            .push(listing.booking_rate_30d);
    }

    groups
        .into_iter()
        .filter_map(|((month, listing_type), acc)| {
            acc.mean().map(|mean_booking_rate| BookingRateByMonthAndType {
                month,
                listing_type: listing_type.to_string(),
                mean_booking_rate,
            })
        })
        .collect()
}

/// Median number of reviews over the whole dataset
///
/// Listings without a review count are ignored; `None` if none has one.
pub fn median_reviews_all(listings: &[Listing]) -> Option<f64> {
    let reviews: Vec<i64> = listings.iter().filter_map(|l| l.number_of_reviews).collect();
    median(&reviews)
}

/// Median number of reviews per host category, sorted by category label
pub fn median_reviews_by_host_category(
    listings: &[Listing],
    language: ReportLanguage,
) -> Vec<MedianReviewsByHost> {
    let mut groups: BTreeMap<HostCategory, Vec<i64>> = BTreeMap::new();
    for listing in listings {
        let reviews = groups.entry(listing.host_category).or_default();
        if let Some(count) = listing.number_of_reviews {
            reviews.push(count);
        }
    }

    let mut rows: Vec<MedianReviewsByHost> = groups
        .into_iter()
        .map(|(host_category, reviews)| MedianReviewsByHost {
            host_category,
            median_reviews: median(&reviews),
        })
        .collect();
    rows.sort_by(|a, b| {
        language
            .host_label(a.host_category)
            .cmp(language.host_label(b.host_category))
    });
    rows
}

/// Listing count per neighbourhood, largest first
///
/// Equal counts are ordered by neighbourhood name.
pub fn listings_by_neighbourhood(listings: &[Listing]) -> Vec<NeighbourhoodDensity> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for listing in listings {
        *counts.entry(listing.neighbourhood.as_str()).or_default() += 1;
    }

    let mut rows: Vec<NeighbourhoodDensity> = counts
        .into_iter()
        .map(|(neighbourhood, listings)| NeighbourhoodDensity {
            neighbourhood: neighbourhood.to_string(),
            listings,
        })
        .collect();
    // Stable sort keeps the name order of the BTreeMap among equal counts
    rows.sort_by(|a, b| b.listings.cmp(&a.listings));
    rows
}

/// Neighbourhoods with the highest mean booking rate, per month
///
/// Means are dense-ranked in descending order within each month and rows
/// with `rank <= top_n` are kept, so ties at the cutoff can yield more than
/// `top_n` rows for a month. Sorted by month, rank, then neighbourhood.
pub fn top_neighbourhoods_by_month(listings: &[Listing], top_n: usize) -> Vec<TopNeighbourhood> {
    let mut months: BTreeMap<YearMonth, BTreeMap<&str, MeanAccumulator>> = BTreeMap::new();
    for listing in listings {
        months
            .entry(listing.month)
            .or_default()
            .entry(listing.neighbourhood.as_str())
            .or_default()
            .push(listing.booking_rate_30d);
    }

    let mut rows = Vec::new();
    for (month, neighbourhoods) in months {
        let means: Vec<(&str, f64)> = neighbourhoods
            .into_iter()
            .filter_map(|(name, acc)| acc.mean().map(|mean| (name, mean)))
            .collect();
        let values: Vec<f64> = means.iter().map(|(_, mean)| *mean).collect();
        let ranks = dense_rank_descending(&values);

        let mut month_rows: Vec<TopNeighbourhood> = means
            .into_iter()
            .zip(ranks)
            .filter(|(_, rank)| *rank as usize <= top_n)
            .map(|((neighbourhood, mean_booking_rate), rank)| TopNeighbourhood {
                month,
                neighbourhood: neighbourhood.to_string(),
                mean_booking_rate,
                rank,
            })
            .collect();
        month_rows.sort_by_key(|row| row.rank);
        rows.extend(month_rows);
    }

    rows
}

/// Computes one report and renders it as a table
pub fn build_report(kind: ReportKind, listings: &[Listing], options: &ReportOptions) -> ReportTable {
    let language = options.language;
    let mut table = ReportTable::new(kind, language);

    match kind {
        ReportKind::BookingRateByMonthAndType => {
            for row in booking_rate_by_month_and_type(listings) {
                table.push_row(vec![
                    Cell::Text(row.month.to_string()),
                    Cell::Text(row.listing_type),
                    Cell::Float(Some(row.mean_booking_rate)),
                ]);
            }
        }
        ReportKind::MedianReviewsAll => {
            table.push_row(vec![Cell::Float(median_reviews_all(listings))]);
        }
        ReportKind::MedianReviewsByHostCategory => {
            for row in median_reviews_by_host_category(listings, language) {
                table.push_row(vec![
                    Cell::Text(language.host_label(row.host_category).to_string()),
                    Cell::Float(row.median_reviews),
                ]);
            }
        }
        ReportKind::ListingsByNeighbourhood => {
            for row in listings_by_neighbourhood(listings) {
                table.push_row(vec![
                    Cell::Text(row.neighbourhood),
                    Cell::Integer(row.listings),
                ]);
            }
        }
        ReportKind::TopNeighbourhoodsByMonth => {
            for row in top_neighbourhoods_by_month(listings, options.top_n) {
                table.push_row(vec![
                    Cell::Text(row.month.to_string()),
                    Cell::Text(row.neighbourhood),
                    Cell::Float(Some(row.mean_booking_rate)),
                    Cell::Integer(u64::from(row.rank)),
                ]);
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::booking_rate_30d;
    use chrono::NaiveDate;

    fn listing(date: &str, neighbourhood: &str, availability: u8, reviews: Option<i64>) -> Listing {
        let scraped_on = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Listing {
            scraped_on,
            room_type: "Private room".to_string(),
            availability_30: availability,
            number_of_reviews: reviews,
            host_category: HostCategory::NonSuperhost,
            neighbourhood: neighbourhood.to_string(),
            booking_rate_30d: booking_rate_30d(availability),
            month: YearMonth::of(scraped_on),
            listing_type: "Chambre privée".to_string(),
        }
    }

    #[test]
    fn test_booking_rate_by_month_and_type() {
        let mut hotel = listing("2024-01-20", "Opéra", 0, None);
        hotel.listing_type = "Chambre d’hôtel".to_string();
        let listings = vec![
            listing("2024-02-01", "Opéra", 30, None),
            listing("2024-01-05", "Opéra", 15, None),
            listing("2024-01-28", "Temple", 0, None),
            hotel,
        ];

        let rows = booking_rate_by_month_and_type(&listings);
        let keys: Vec<(String, &str)> = rows
            .iter()
            .map(|r| (r.month.to_string(), r.listing_type.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-01".to_string(), "Chambre d’hôtel"),
                ("2024-01".to_string(), "Chambre privée"),
                ("2024-02".to_string(), "Chambre privée"),
            ]
        );
        assert_eq!(rows[0].mean_booking_rate, 1.0);
        assert_eq!(rows[1].mean_booking_rate, 0.75);
        assert_eq!(rows[2].mean_booking_rate, 0.0);
    }

    #[test]
    fn test_median_reviews_all_ignores_missing() {
        let listings = vec![
            listing("2024-01-01", "Opéra", 0, Some(10)),
            listing("2024-01-01", "Opéra", 0, None),
            listing("2024-02-01", "Temple", 0, Some(2)),
            listing("2024-03-01", "Temple", 0, Some(4)),
        ];
        assert_eq!(median_reviews_all(&listings), Some(4.0));
        assert_eq!(median_reviews_all(&[]), None);
    }

    #[test]
    fn test_median_reviews_by_host_category_order() {
        let mut superhost = listing("2024-01-01", "Opéra", 0, Some(30));
        superhost.host_category = HostCategory::Superhost;
        let listings = vec![superhost, listing("2024-01-01", "Opéra", 0, Some(3))];

        for language in [ReportLanguage::Fr, ReportLanguage::En] {
            let rows = median_reviews_by_host_category(&listings, language);
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].host_category, HostCategory::NonSuperhost);
            assert_eq!(rows[0].median_reviews, Some(3.0));
            assert_eq!(rows[1].host_category, HostCategory::Superhost);
            assert_eq!(rows[1].median_reviews, Some(30.0));
        }
    }

    #[test]
    fn test_listings_by_neighbourhood_sorted_by_count() {
        let listings = vec![
            listing("2024-01-01", "Temple", 0, None),
            listing("2024-01-01", "Opéra", 0, None),
            listing("2024-01-01", "Temple", 0, None),
            listing("2024-01-01", "Louvre", 0, None),
        ];

        let rows = listings_by_neighbourhood(&listings);
        assert_eq!(
            rows,
            vec![
                NeighbourhoodDensity { neighbourhood: "Temple".to_string(), listings: 2 },
                NeighbourhoodDensity { neighbourhood: "Louvre".to_string(), listings: 1 },
                NeighbourhoodDensity { neighbourhood: "Opéra".to_string(), listings: 1 },
            ]
        );
    }

    #[test]
    fn test_top_neighbourhoods_dense_rank_keeps_ties() {
        let listings = vec![
            listing("2024-01-01", "Batignolles", 0, None),
            listing("2024-01-02", "Bastille", 0, None),
            listing("2024-01-03", "Louvre", 15, None),
            listing("2024-01-04", "Temple", 30, None),
            listing("2024-02-01", "Temple", 3, None),
        ];

        let rows = top_neighbourhoods_by_month(&listings, 2);
        let summary: Vec<(String, &str, u32)> = rows
            .iter()
            .map(|r| (r.month.to_string(), r.neighbourhood.as_str(), r.rank))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("2024-01".to_string(), "Bastille", 1),
                ("2024-01".to_string(), "Batignolles", 1),
                ("2024-01".to_string(), "Louvre", 2),
                ("2024-02".to_string(), "Temple", 1),
            ]
        );
    }

    #[test]
    fn test_top_neighbourhoods_rank_cutoff() {
        let listings: Vec<Listing> = (0..10u8)
            .map(|i| listing("2024-05-10", &format!("Quartier {i}"), i, None))
            .collect();

        let rows = top_neighbourhoods_by_month(&listings, 5);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.rank <= 5));
        assert_eq!(rows[0].neighbourhood, "Quartier 0");
    }

    #[test]
    fn test_build_report_median_all_is_single_row() {
        let options = ReportOptions { top_n: 5, language: ReportLanguage::Fr };
        let table = build_report(ReportKind::MedianReviewsAll, &[], &options);
        assert_eq!(table.rows, vec![vec![Cell::Float(None)]]);
    }

    #[test]
    fn test_build_report_host_labels() {
        let mut superhost = listing("2024-01-01", "Opéra", 0, Some(1));
        superhost.host_category = HostCategory::Superhost;
        let listings = vec![superhost, listing("2024-01-01", "Opéra", 0, Some(5))];

        let options = ReportOptions { top_n: 5, language: ReportLanguage::Fr };
        let table = build_report(ReportKind::MedianReviewsByHostCategory, &listings, &options);
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::Text("Non superhôte".to_string()), Cell::Float(Some(5.0))],
                vec![Cell::Text("Superhôte".to_string()), Cell::Float(Some(1.0))],
            ]
        );
    }
}
