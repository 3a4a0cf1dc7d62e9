//! External system integrations for listing reports.
//!
//! This module provides adapters for the systems a run touches:
//!
//! - [`source`] - Listing source abstraction (trait-based)
//! - [`mongodb`] - MongoDB implementation of the listing source
//! - [`sink`] - CSV files in the output directory
//!
//! # Design Pattern
//!
//! The pipeline only sees the [`source::ListingSource`] trait, so tests run
//! it against in-memory listings without a MongoDB server.

pub mod mongodb;
pub mod sink;
pub mod source;
