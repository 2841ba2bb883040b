//! # pricer_core: Numeric Foundation for the Impact Lattice Kernel
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Path statistics: geometric and arithmetic means (`math::statistics`)
//! - Error types: `PricingError`, `StatisticsError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::statistics::{arithmetic_mean, geometric_mean};
//!
//! let prices = [100.0_f64, 120.0, 144.0];
//! let g = geometric_mean(&prices).unwrap();
//! let a = arithmetic_mean(&prices).unwrap();
//!
//! assert!((g - 120.0).abs() < 1e-10);
//! assert!(g <= a);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
