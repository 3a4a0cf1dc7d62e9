//! Run summary and reporting
//!
//! This module defines structures for tracking and reporting run results.

use crate::core::report::ReportKind;
use crate::core::transform::RejectionCounts;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub kind: ReportKind,

    /// Number of data rows, header excluded
    pub rows: usize,

    /// Written file; `None` in dry-run mode
    pub path: Option<PathBuf>,
}

/// Summary of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Documents returned by the source
    pub fetched: usize,

    /// Listings that survived cleaning
    pub kept: usize,

    /// Dropped listings per reason
    pub rejections: RejectionCounts,

    /// CSV files removed before writing
    pub removed_files: usize,

    /// One entry per report, in output order
    pub reports: Vec<ReportOutcome>,

    /// True if no file was touched
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a new empty run summary
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Files written during the run
    pub fn written_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.reports.iter().filter_map(|report| report.path.as_ref())
    }

    /// Percentage of fetched listings kept by cleaning
    pub fn kept_rate(&self) -> f64 {
        if self.fetched == 0 {
            return 0.0;
        }
        (self.kept as f64 / self.fetched as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            fetched = self.fetched,
            kept = self.kept,
            rejected_missing_field = self.rejections.missing_field,
            rejected_availability = self.rejections.availability_out_of_range,
            rejected_neighbourhood = self.rejections.malformed_neighbourhood,
            reports = self.reports.len(),
            removed_files = self.removed_files,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            kept_rate = format!("{:.2}%", self.kept_rate()),
            "Run completed"
        );
    }
}
