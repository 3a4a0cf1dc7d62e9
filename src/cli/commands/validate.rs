//! Validate config command implementation
//!
//! This module implements the `validate-config` command: load and validate
//! the configuration, show the effective settings, optionally ping MongoDB.

use super::report_failure;
use crate::adapters::mongodb::{resolve_connection_target, MongoListingSource};
use crate::adapters::source::ListingSource;
use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Also check that MongoDB is reachable
    #[arg(long)]
    pub ping: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        match config_path {
            Some(path) => {
                tracing::info!(config_path = %path.display(), "Validating configuration")
            }
            None => tracing::info!("Validating configuration from environment"),
        }

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => return Ok(report_failure(&e, "Configuration validation failed")),
        };

        let target = match resolve_connection_target(&config.mongodb) {
            Ok(t) => t,
            Err(e) => return Ok(report_failure(&e, "Configuration validation failed")),
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  MongoDB: {target}");
        println!("  Database: {}", config.mongodb.database);
        println!("  Collection: {}", config.mongodb.collection);
        println!("  Output Directory: {}", config.output.directory.display());
        println!("  Top N: {}", config.output.top_n);
        println!("  Clean Before Write: {}", config.output.clean_before_write);
        println!("  Language: {}", config.output.language);
        match config.output.float_precision {
            Some(precision) => println!("  Float Precision: {precision}"),
            None => println!("  Float Precision: shortest"),
        }
        println!();

        if !self.ping {
            return Ok(0);
        }

        let source = match MongoListingSource::connect(&target, &config.mongodb).await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure(&e, "Failed to initialize MongoDB source")),
        };
        if let Err(e) = source.ping().await {
            return Ok(report_failure(&e, "MongoDB unreachable"));
        }

        println!("✅ MongoDB reachable ({})", source.describe());
        Ok(0)
    }
}
