//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Listing Reports - MongoDB listings to CSV reports
#[derive(Parser, Debug)]
#[command(name = "listing-reports")]
#[command(version, about, long_about = None)]
#[command(author = "Listing Reports Contributors")]
pub struct Cli {
    /// Optional TOML configuration file, environment variables still apply on top
    #[arg(short, long, env = "LISTING_REPORTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Directory for JSON log files, file logging is off when unset
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract listings and write the five CSV reports
    Run(commands::run::RunArgs),

    /// Validate configuration and show the effective settings
    ValidateConfig(commands::validate::ValidateArgs),
}
