//! Report generation
//!
//! Five independent aggregations over the cleaned listings:
//!
//! | # | [`ReportKind`] | Grouping | Metric |
//! |---|---|---|---|
//! | 1 | `BookingRateByMonthAndType` | month, listing type | mean booking rate |
//! | 2 | `MedianReviewsAll` | none | median reviews |
//! | 3 | `MedianReviewsByHostCategory` | host category | median reviews |
//! | 4 | `ListingsByNeighbourhood` | neighbourhood | count |
//! | 5 | `TopNeighbourhoodsByMonth` | month, neighbourhood | mean booking rate, dense rank ≤ top-N |

pub mod aggregate;
pub mod generate;
pub mod table;

pub use generate::{build_report, ReportOptions};
pub use table::{Cell, ReportKind, ReportTable};
