//! Source abstraction layer (trait-based)

pub mod traits;

pub use traits::ListingSource;
