//! Configuration schema types
//!
//! The whole job is driven by one immutable [`ReportsConfig`], built once
//! at startup by [`crate::config::load_config`] and passed down explicitly.

use crate::adapters::mongodb::connection::resolve_connection_target;
use crate::config::SecretString;
use crate::domain::{ReportError, ReportLanguage};
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportsConfig {
    /// MongoDB connection settings
    #[serde(default)]
    pub mongodb: MongoConfig,

    /// Report and CSV output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl ReportsConfig {
    /// Validates the configuration
    ///
    /// Includes the credential completeness check, so an incomplete
    /// user/password pair is reported before any network call.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.mongodb.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// MongoDB connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MongoConfig {
    /// Pre-built connection string, used verbatim when set
    #[serde(default)]
    pub uri: Option<SecretString>,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Authentication database
    #[serde(default = "default_auth_source")]
    pub auth_source: String,

    /// Must be set together with `password`
    #[serde(default)]
    pub username: Option<String>,

    /// Must be set together with `username`
    #[serde(default)]
    pub password: Option<SecretString>,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,
}

impl MongoConfig {
    fn validate(&self) -> Result<(), String> {
        if self.database.trim().is_empty() {
            return Err("mongodb.database cannot be empty".to_string());
        }
        if self.collection.trim().is_empty() {
            return Err("mongodb.collection cannot be empty".to_string());
        }

        resolve_connection_target(self)
            .map(|_| ())
            .map_err(|e| match e {
                ReportError::Configuration(msg) => msg,
                other => other.to_string(),
            })
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: None,
            host: default_host(),
            port: default_port(),
            auth_source: default_auth_source(),
            username: None,
            password: None,
            database: default_database(),
            collection: default_collection(),
        }
    }
}

/// Report and CSV output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the CSV files, created if absent
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Dense-rank cutoff of the monthly neighbourhood leaderboard
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Delete existing `*.csv` files in `directory` before writing
    #[serde(default)]
    pub clean_before_write: bool,

    /// Labels, headers and filenames
    #[serde(default)]
    pub language: ReportLanguage,

    /// Fixed number of decimals for float cells (shortest repr when unset)
    #[serde(default)]
    pub float_precision: Option<usize>,
}

/// Upper bound for `float_precision`; f64 carries 17 significant digits
pub const MAX_FLOAT_PRECISION: usize = 17;

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }

        if self.top_n == 0 {
            return Err("output.top_n must be a positive integer".to_string());
        }

        if let Some(precision) = self.float_precision {
            if precision > MAX_FLOAT_PRECISION {
                return Err(format!(
                    "output.float_precision must be at most {MAX_FLOAT_PRECISION}, got {precision}"
                ));
            }
        }

        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            top_n: default_top_n(),
            clean_before_write: false,
            language: ReportLanguage::default(),
            float_precision: None,
        }
    }
}

/// Logging configuration
///
/// Built from CLI arguments rather than the config file, so logging is up
/// before the configuration is loaded.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    pub local_enabled: bool,

    /// Directory for log files
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: "logs".to_string(),
            local_rotation: "daily".to_string(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    27017
}

fn default_auth_source() -> String {
    "admin".to_string()
}

fn default_database() -> String {
    "P7MLO".to_string()
}

fn default_collection() -> String {
    "listings".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_top_n() -> usize {
    5
}
