//! Run command implementation
//!
//! This module implements the `run` command: extract the listings, build
//! the five reports and write them as CSV files.

use super::report_failure;
use crate::config::{load_config, ReportsConfig};
use crate::core::export::{ReportCoordinator, RunSummary};
use crate::domain::ReportError;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Compute every report without writing or deleting any file
    #[arg(long)]
    pub dry_run: bool,

    /// Override the top-N cutoff of the neighbourhood leaderboard
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Override the output directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Delete existing CSV files in the output directory first
    #[arg(long)]
    pub clean: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        let config = match load_config(config_path).and_then(|c| self.apply_overrides(c)) {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Failed to load configuration")),
        };

        if self.dry_run {
            tracing::info!("Dry run mode enabled - no file will be written");
        }

        let coordinator = match ReportCoordinator::connect(config).await {
            Ok(c) => c.with_dry_run(self.dry_run),
            Err(e) => return Ok(report_failure(&e, "Failed to initialize MongoDB source")),
        };

        let summary = match coordinator.execute().await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure(&e, "Run failed")),
        };

        print_summary(&summary);
        Ok(0)
    }

    /// Applies CLI flags on top of the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] if the result is invalid,
    /// e.g. `--top-n 0`.
    pub fn apply_overrides(&self, mut config: ReportsConfig) -> crate::domain::Result<ReportsConfig> {
        if let Some(top_n) = self.top_n {
            tracing::info!(top_n, "Overriding top-N from CLI");
            config.output.top_n = top_n;
        }

        if let Some(dir) = &self.output_dir {
            tracing::info!(directory = %dir.display(), "Overriding output directory from CLI");
            config.output.directory = dir.clone();
        }

        if self.clean {
            config.output.clean_before_write = true;
        }

        config.validate().map_err(ReportError::Configuration)?;
        Ok(config)
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Run Summary:");
    println!("  Fetched: {}", summary.fetched);
    println!("  Kept: {} ({:.2}%)", summary.kept, summary.kept_rate());
    println!("  Rejected: {}", summary.rejections.total());
    println!("    Missing fields: {}", summary.rejections.missing_field);
    println!(
        "    Availability out of range: {}",
        summary.rejections.availability_out_of_range
    );
    println!(
        "    Malformed neighbourhood: {}",
        summary.rejections.malformed_neighbourhood
    );
    if summary.removed_files > 0 {
        println!("  Previous CSV files removed: {}", summary.removed_files);
    }
    for report in &summary.reports {
        match &report.path {
            Some(path) => println!("  {} ({} rows)", path.display(), report.rows),
            None => println!("  {:?}: {} rows (not written)", report.kind, report.rows),
        }
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if summary.dry_run {
        println!("✅ Dry run completed, no file written");
    } else {
        println!("✅ Reports written");
    }
}
