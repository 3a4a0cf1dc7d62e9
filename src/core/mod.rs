//! Core business logic for listing reports.
//!
//! # Modules
//!
//! - [`export`] - Run orchestration, extraction and summary
//! - [`transform`] - Coercion, cleaning and enrichment of raw listings
//! - [`report`] - The five report computations and their tabular model
//!
//! # Run Workflow
//!
//! 1. **Resolve**: Build the connection target, failing on partial credentials
//! 2. **Prepare**: Create the output directory, optionally clear old CSV files
//! 3. **Extract**: Ping MongoDB, then fetch every listing with a fixed projection
//! 4. **Clean**: Coerce types, drop invalid listings, derive columns
//! 5. **Report**: Compute each report and write it atomically
//! 6. **Summarize**: Log counts and duration
//!
//! # Example
//!
//! ```rust,no_run
//! use listing_reports::config::load_config;
//! use listing_reports::core::export::ReportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let coordinator = ReportCoordinator::connect(config).await?;
//! let summary = coordinator.execute().await?;
//!
//! println!("Fetched: {}", summary.fetched);
//! println!("Kept: {}", summary.kept);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod report;
pub mod transform;
