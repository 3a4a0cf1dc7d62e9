// Listing Reports - MongoDB listings to CSV reports
// Copyright (c) 2025 Listing Reports Contributors
// Licensed under the MIT License

//! # Listing Reports - MongoDB listings to CSV reports
//!
//! A batch ETL job that reads short-term rental listings from a MongoDB
//! collection and writes five analytical CSV reports.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** listings from MongoDB after a reachability check
//! - **Cleaning** them: type coercion, mandatory fields, range and format filters
//! - **Enriching** them with a booking rate, a month bucket and translated labels
//! - **Reporting** booking rates, review medians and neighbourhood density as CSV
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (run orchestration, cleaning, reports)
//! - [`adapters`] - External integrations (MongoDB, CSV files)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use listing_reports::config::load_config;
//! use listing_reports::core::export::ReportCoordinator;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config(None)?;
//!     let coordinator = ReportCoordinator::connect(config).await?;
//!     let summary = coordinator.execute().await?;
//!
//!     println!("Kept {} of {} listings", summary.kept, summary.fetched);
//!     Ok(())
//! }
//! ```
//!
//! ## Reports
//!
//! Report computations are pure functions over cleaned listings:
//!
//! ```rust
//! use listing_reports::core::report::{build_report, ReportKind, ReportOptions};
//! use listing_reports::domain::ReportLanguage;
//!
//! let options = ReportOptions { top_n: 5, language: ReportLanguage::En };
//! let table = build_report(ReportKind::MedianReviewsAll, &[], &options);
//! assert_eq!(table.file_name(), "02_median_reviews_all.csv");
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::ReportError`], which maps to a
//! process exit code:
//!
//! ```rust
//! use listing_reports::domain::ReportError;
//!
//! let error = ReportError::DataAvailability("empty collection".to_string());
//! assert_eq!(error.exit_code(), 3);
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
