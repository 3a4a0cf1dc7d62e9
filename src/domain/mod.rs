//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Listing records** ([`RawListing`] as fetched, [`Listing`] once cleaned)
//! - **Report vocabulary** ([`ReportLanguage`], [`HostCategory`])
//! - **Error types** ([`ReportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use listing_reports::domain::{ReportError, Result};
//!
//! fn check_top_n(top_n: usize) -> Result<()> {
//!     if top_n == 0 {
//!         return Err(ReportError::Configuration("TOP_N must be positive".into()));
//!     }
//!     Ok(())
//! }
//! # assert!(check_top_n(0).is_err());
//! ```

pub mod errors;
pub mod labels;
pub mod listing;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::ReportError;
pub use labels::{HostCategory, ReportLanguage};
pub use listing::{Listing, RawListing, YearMonth};
pub use result::Result;
