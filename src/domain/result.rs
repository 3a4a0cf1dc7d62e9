//! Result type alias for the reporting job

use super::errors::ReportError;

/// Result type alias using [`ReportError`] as the error type
///
/// # Examples
///
/// ```
/// use listing_reports::domain::result::Result;
/// use listing_reports::domain::errors::ReportError;
///
/// fn failing_function() -> Result<()> {
///     Err(ReportError::Configuration("TOP_N must be positive".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, ReportError>;
