//! Tabular report model
//!
//! Every report renders into a [`ReportTable`]: a [`ReportKind`], its
//! language-specific header row, and rows of [`Cell`]s. The CSV sink only
//! deals with this shape.

use crate::domain::ReportLanguage;

/// The five reports produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Mean booking rate per month and listing type
    BookingRateByMonthAndType,
    /// Median number of reviews over all listings
    MedianReviewsAll,
    /// Median number of reviews per host category
    MedianReviewsByHostCategory,
    /// Listing count per neighbourhood
    ListingsByNeighbourhood,
    /// Monthly top neighbourhoods by mean booking rate
    TopNeighbourhoodsByMonth,
}

impl ReportKind {
    /// All reports, in output order
    pub const ALL: [ReportKind; 5] = [
        ReportKind::BookingRateByMonthAndType,
        ReportKind::MedianReviewsAll,
        ReportKind::MedianReviewsByHostCategory,
        ReportKind::ListingsByNeighbourhood,
        ReportKind::TopNeighbourhoodsByMonth,
    ];

    /// Output filename
    pub fn file_name(&self, language: ReportLanguage) -> &'static str {
        use ReportKind::*;
        match (language, self) {
            (ReportLanguage::Fr, BookingRateByMonthAndType) => {
                "01_taux_reservation_moyen_par_mois_et_type_logement.csv"
            }
            (ReportLanguage::Fr, MedianReviewsAll) => "02_mediane_nombre_avis_tous_logements.csv",
            (ReportLanguage::Fr, MedianReviewsByHostCategory) => {
                "03_mediane_nombre_avis_par_categorie_hote.csv"
            }
            (ReportLanguage::Fr, ListingsByNeighbourhood) => {
                "04_densite_logements_par_quartier.csv"
            }
            (ReportLanguage::Fr, TopNeighbourhoodsByMonth) => {
                "05_top_quartiers_taux_reservation_par_mois.csv"
            }
            (ReportLanguage::En, BookingRateByMonthAndType) => {
                "01_booking_rate_by_month_room_type.csv"
            }
            (ReportLanguage::En, MedianReviewsAll) => "02_median_reviews_all.csv",
            (ReportLanguage::En, MedianReviewsByHostCategory) => {
                "03_median_reviews_by_host_category.csv"
            }
            (ReportLanguage::En, ListingsByNeighbourhood) => {
                "04_listings_density_by_neighbourhood.csv"
            }
            (ReportLanguage::En, TopNeighbourhoodsByMonth) => {
                "05_top_neighbourhoods_booking_rate_by_month.csv"
            }
        }
    }

    /// Header row
    pub fn headers(&self, language: ReportLanguage) -> &'static [&'static str] {
        use ReportKind::*;
        match (language, self) {
            (ReportLanguage::Fr, BookingRateByMonthAndType) => {
                &["mois", "type_logement", "taux_reservation_moyen"]
            }
            (ReportLanguage::Fr, MedianReviewsAll) => &["mediane_nombre_avis"],
            (ReportLanguage::Fr, MedianReviewsByHostCategory) => {
                &["categorie_hote", "mediane_nombre_avis"]
            }
            (ReportLanguage::Fr, ListingsByNeighbourhood) => &["quartier", "nombre_annonces"],
            (ReportLanguage::Fr, TopNeighbourhoodsByMonth) => {
                &["mois", "quartier", "taux_reservation_moyen", "rang"]
            }
            (ReportLanguage::En, BookingRateByMonthAndType) => {
                &["month", "room_type", "avg_booking_rate"]
            }
            (ReportLanguage::En, MedianReviewsAll) => &["median_reviews_all"],
            (ReportLanguage::En, MedianReviewsByHostCategory) => {
                &["host_category", "median_reviews"]
            }
            (ReportLanguage::En, ListingsByNeighbourhood) => &["neighbourhood", "listings_count"],
            (ReportLanguage::En, TopNeighbourhoodsByMonth) => {
                &["month", "neighbourhood", "avg_booking_rate", "rank"]
            }
        }
    }
}

/// One value of a report row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(u64),
    /// `None` renders as an empty field
    Float(Option<f64>),
}

impl Cell {
    /// Renders the cell for CSV output
    ///
    /// Floats use `precision` decimals when given, otherwise the shortest
    /// representation that round-trips, keeping one decimal for integral
    /// values (`12.0`).
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Integer(value) => value.to_string(),
            Cell::Float(None) => String::new(),
            Cell::Float(Some(value)) => match precision {
                Some(precision) => format!("{value:.precision$}"),
                None if value.is_finite() && value.fract() == 0.0 => format!("{value:.1}"),
                None => value.to_string(),
            },
        }
    }
}

/// Rendered report, ready for the sink
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub language: ReportLanguage,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn new(kind: ReportKind, language: ReportLanguage) -> Self {
        Self {
            kind,
            language,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.headers(self.language)
    }

    pub fn file_name(&self) -> &'static str {
        self.kind.file_name(self.language)
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers().len());
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_distinct_csv() {
        for language in [ReportLanguage::Fr, ReportLanguage::En] {
            let names: HashSet<_> = ReportKind::ALL
                .iter()
                .map(|kind| kind.file_name(language))
                .collect();
            assert_eq!(names.len(), 5);
            assert!(names.iter().all(|name| name.ends_with(".csv")));
        }
    }

    #[test]
    fn test_render_float_cells() {
        assert_eq!(Cell::Float(Some(12.0)).render(None), "12.0");
        assert_eq!(Cell::Float(Some(2.0 / 3.0)).render(None), "0.6666666666666666");
        assert_eq!(Cell::Float(Some(2.0 / 3.0)).render(Some(4)), "0.6667");
        assert_eq!(Cell::Float(None).render(Some(4)), "");
    }

    #[test]
    fn test_render_other_cells() {
        assert_eq!(Cell::Integer(42).render(None), "42");
        assert_eq!(Cell::Text("Opéra".to_string()).render(Some(2)), "Opéra");
    }

    #[test]
    fn test_table_headers_follow_language() {
        let table = ReportTable::new(ReportKind::TopNeighbourhoodsByMonth, ReportLanguage::Fr);
        assert_eq!(table.headers(), &["mois", "quartier", "taux_reservation_moyen", "rang"]);

        let table = ReportTable::new(ReportKind::MedianReviewsAll, ReportLanguage::En);
        assert_eq!(table.headers(), &["median_reviews_all"]);
        assert_eq!(table.file_name(), "02_median_reviews_all.csv");
    }
}
