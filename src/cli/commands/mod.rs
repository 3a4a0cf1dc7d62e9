//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod run;
pub mod validate;

use crate::domain::ReportError;
use crate::log_error_with_context;

/// Reports a fatal error on stderr and returns its exit code
fn report_failure(error: &ReportError, context: &str) -> i32 {
    log_error_with_context!(error, context);
    eprintln!("[ERROR] {error}");
    error.exit_code()
}
