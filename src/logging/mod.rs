//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Human-readable console output on stderr
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use listing_reports::logging::init_logging;
//! use listing_reports::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use listing_reports::log_error_with_context;
/// use listing_reports::domain::ReportError;
///
/// let error = ReportError::Connection("server selection timeout".to_string());
/// log_error_with_context!(&error, "MongoDB unreachable");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            exit_code = $error.exit_code(),
            context = $context,
            "Error occurred"
        );
    };
}
