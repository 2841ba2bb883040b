//! # Pricer Engine (Layer 3: Lattice Pricing Kernels)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing values Asian call options on the price-impact binomial
//! lattice of `pricer_models` by exhaustive path enumeration:
//! - Exact geometric-average Asian call price
//! - Lower/upper bounds for the arithmetic-average Asian call, using the
//!   geometric option as a control variate
//! - Exact arithmetic-average price as a verification reference
//!
//! ## Determinism
//!
//! Every entry point is a pure function of its inputs. Paths are visited in
//! a fixed order and summed sequentially, so identical inputs give
//! bit-identical outputs.
//!
//! ## Cost
//!
//! All pricers cost `Θ(2^n · n)` time and `Θ(n)` memory. The step count is
//! bounded by [`LatticeConfig`] (default 24) and never silently reduced.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::{arithmetic_asian_bounds, price_geometric_asian};
//!
//! let price = price_geometric_asian(100.0, 100.0, 1.05, 1.2, 0.8, 0.1, 1.0, 1.0, 3).unwrap();
//! let bounds = arithmetic_asian_bounds(100.0, 100.0, 1.05, 1.2, 0.8, 0.1, 1.0, 1.0, 3).unwrap();
//!
//! assert_eq!(bounds.lower_bound, price);
//! assert!(bounds.upper_bound >= bounds.lower_bound);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for [`ArithmeticBounds`] and the parameter records

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lattice;

pub use lattice::{
    arithmetic_asian_bounds, price_arithmetic_asian, price_geometric_asian,
    ArithmeticAsianPricer, ArithmeticBounds, ArithmeticBoundsEstimator, ConfigError,
    GeometricAsianPricer, LatticeConfig, LatticePricingError,
};
