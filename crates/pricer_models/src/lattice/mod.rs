//! Price-impact binomial lattice.
//!
//! A Cox-Ross-Rubinstein lattice whose up/down multipliers are shifted by
//! the market impact of delta-hedging trades:
//!
//! ```text
//! ũ = u · exp(λ · v_u)
//! d̃ = d · exp(-λ · v_d)
//! p = (r - d̃) / (ũ - d̃)
//! ```
//!
//! # Components
//!
//! - [`LatticeFactors`]: derived multipliers and probability
//! - [`PathEnumerator`] / [`MoveSequence`]: every binary path of `n` steps
//! - [`PricePathBuilder`]: price trajectory along one path

pub mod error;
pub mod factors;
pub mod paths;
pub mod trajectory;

pub use error::LatticeError;
pub use factors::LatticeFactors;
pub use paths::{Move, MoveSequence, PathEnumerator, MAX_ENUMERABLE_STEPS};
pub use trajectory::PricePathBuilder;
