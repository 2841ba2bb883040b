//! Core error types shared across the workspace.
//!
//! This module provides:
//! - `error`: Structured error types for pricing and statistics operations
//!
//! # Re-exports
//!
//! - [`PricingError`], [`StatisticsError`] from `error`

pub mod error;

pub use error::{PricingError, StatisticsError};
