//! Report coordinator - main orchestrator for a run
//!
//! This module wires the connection target, the listing source, the
//! cleaner, the report computations and the CSV sink into one sequential
//! run.

use crate::adapters::mongodb::{resolve_connection_target, MongoListingSource};
use crate::adapters::sink::CsvSink;
use crate::adapters::source::ListingSource;
use crate::config::ReportsConfig;
use crate::core::export::extract::extract_listings;
use crate::core::export::summary::{ReportOutcome, RunSummary};
use crate::core::report::{build_report, ReportKind, ReportOptions};
use crate::core::transform::clean_listings;
use crate::domain::{ReportError, Result};
use std::time::Instant;

/// Report coordinator
pub struct ReportCoordinator {
    config: ReportsConfig,
    source: Box<dyn ListingSource>,
    dry_run: bool,
}

impl ReportCoordinator {
    /// Create a coordinator over an existing source
    pub fn new(config: ReportsConfig, source: Box<dyn ListingSource>) -> Self {
        Self {
            config,
            source,
            dry_run: false,
        }
    }

    /// Compute every report without touching the output directory
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Create a coordinator backed by the configured MongoDB collection
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] for incomplete credentials,
    /// before any network activity, and [`ReportError::Connection`] if the
    /// client cannot be built.
    pub async fn connect(config: ReportsConfig) -> Result<Self> {
        let target = resolve_connection_target(&config.mongodb)?;
        tracing::debug!(uri = %target.redacted(), kind = ?target.kind(), "Connection target resolved");

        let source = MongoListingSource::connect(&target, &config.mongodb).await?;
        Ok(Self::new(config, Box::new(source)))
    }

    /// Execute the run
    ///
    /// 1. Prepare the output directory (skipped in dry-run mode)
    /// 2. Ping the source and fetch every listing
    /// 3. Clean and enrich the listings
    /// 4. For each report: compute, then write
    ///
    /// Reports are written in order; a failure leaves the files already
    /// written in place.
    pub async fn execute(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let mut summary = RunSummary::new(self.dry_run);
        let output = &self.config.output;

        tracing::info!(
            source = %self.source.describe(),
            top_n = output.top_n,
            language = %output.language,
            dry_run = self.dry_run,
            "Starting report run"
        );

        let sink = CsvSink::new(&output.directory, output.float_precision);
        if !self.dry_run {
            summary.removed_files = sink.prepare(output.clean_before_write)?;
            tracing::info!(
                directory = %sink.directory().display(),
                cleanup = output.clean_before_write,
                "Output directory ready"
            );
        }

        let raw = extract_listings(self.source.as_ref()).await?;
        summary.fetched = raw.len();

        let cleaned = clean_listings(raw, output.language);
        summary.kept = cleaned.listings.len();
        summary.rejections = cleaned.rejections;

        tracing::info!(
            kept = summary.kept,
            rejected = summary.rejections.total(),
            missing_field = summary.rejections.missing_field,
            availability_out_of_range = summary.rejections.availability_out_of_range,
            malformed_neighbourhood = summary.rejections.malformed_neighbourhood,
            "Listings cleaned"
        );
        if cleaned.listings.is_empty() {
            tracing::warn!("No listing survived cleaning, reports will only carry headers");
        }

        let options = ReportOptions {
            top_n: output.top_n,
            language: output.language,
        };

        for kind in ReportKind::ALL {
            let table = build_report(kind, &cleaned.listings, &options);
            let rows = table.rows.len();

            let path = if self.dry_run {
                tracing::info!(report = table.file_name(), rows, "Report computed (dry run)");
                None
            } else {
                let path = sink.write(&table).map_err(|e| match e {
                    ReportError::Csv(msg) => {
                        ReportError::Csv(format!("{}: {}", table.file_name(), msg))
                    }
                    other => other,
                })?;
                Some(path)
            };

            summary.reports.push(ReportOutcome { kind, rows, path });
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawListing;
    use async_trait::async_trait;
    use mongodb::bson::doc;
    use tempfile::TempDir;

    struct FixedSource(Vec<RawListing>);

    #[async_trait]
    impl ListingSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn ping(&self) -> Result<()> {
            Ok(())
        }

        async fn fetch_all(&self) -> Result<Vec<RawListing>> {
            Ok(self.0.clone())
        }
    }

    fn config_for(dir: &TempDir) -> ReportsConfig {
        let mut config = ReportsConfig::default();
        config.output.directory = dir.path().join("out");
        config
    }

    fn one_listing() -> Vec<RawListing> {
        vec![RawListing::from(doc! {
            "last_scraped": "2024-03-15",
            "room_type": "Entire home/apt",
            "availability_30": 15,
            "number_of_reviews": 4,
            "host_is_superhost": "t",
            "neighbourhood_cleansed": "Buttes-Montmartre",
        })]
    }

    #[tokio::test]
    async fn test_execute_writes_five_reports() {
        let dir = TempDir::new().unwrap();
        let coordinator =
            ReportCoordinator::new(config_for(&dir), Box::new(FixedSource(one_listing())));

        let summary = coordinator.execute().await.unwrap();

        assert_eq!(summary.fetched, 1);
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.reports.len(), 5);
        assert_eq!(summary.written_files().count(), 5);
        assert!(summary.written_files().all(|path| path.exists()));
    }

    #[tokio::test]
    async fn test_dry_run_leaves_directory_untouched() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir);
        let out = config.output.directory.clone();
        let coordinator =
            ReportCoordinator::new(config, Box::new(FixedSource(one_listing()))).with_dry_run(true);

        let summary = coordinator.execute().await.unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.reports.len(), 5);
        assert_eq!(summary.written_files().count(), 0);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_empty_source_is_data_availability_error() {
        let dir = TempDir::new().unwrap();
        let coordinator = ReportCoordinator::new(config_for(&dir), Box::new(FixedSource(vec![])));

        let err = coordinator.execute().await.unwrap_err();
        assert!(matches!(err, ReportError::DataAvailability(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_connect_rejects_incomplete_credentials() {
        let mut config = ReportsConfig::default();
        config.mongodb.username = Some("analyst".to_string());

        let err = ReportCoordinator::connect(config).await.err().unwrap();
        assert!(matches!(err, ReportError::Configuration(_)));
    }
}
