//! Report sink
//!
//! - [`csv_writer`] - one UTF-8 CSV file per report, header row included

pub mod csv_writer;

pub use csv_writer::{remove_csv_files, CsvSink};
