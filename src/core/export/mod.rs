//! Run orchestration
//!
//! This module provides the pipeline driver, including:
//! - Extraction with reachability check
//! - Run coordination from configuration to CSV files
//! - Summary and reporting

pub mod coordinator;
pub mod extract;
pub mod summary;

pub use coordinator::ReportCoordinator;
pub use extract::extract_listings;
pub use summary::{ReportOutcome, RunSummary};
