//! Configuration management for listing reports.
//!
//! This module provides configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Settings come from three layers, later layers winning:
//! - Built-in defaults
//! - An optional TOML file with `${VAR_NAME}` substitution
//! - Environment variables (`MONGO_*`, `OUTDIR`, `TOP_N`, `NETTOYER_OUTPUTS`, ...)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use listing_reports::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//!
//! println!("Database: {}", config.mongodb.database);
//! println!("Output: {}", config.output.directory.display());
//! println!("Top N: {}", config.output.top_n);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`MongoConfig`] - Connection string or host/credentials, database and collection
//! - [`OutputConfig`] - Output directory, top-N cutoff, cleanup, language, float precision
//! - [`LoggingConfig`] - File logging, built from CLI arguments
//!
//! # Example Configuration
//!
//! ```toml
//! [mongodb]
//! host = "mongo.internal"
//! username = "analyst"
//! password = "${MONGO_PASS}"
//! database = "P7MLO"
//! collection = "listings"
//!
//! [output]
//! directory = "outputs"
//! top_n = 5
//! clean_before_write = true
//! language = "fr"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_with};
pub use schema::{LoggingConfig, MongoConfig, OutputConfig, ReportsConfig};
pub use secret::{secret_string, SecretString, SecretValue};
