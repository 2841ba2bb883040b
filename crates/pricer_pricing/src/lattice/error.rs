//! Error types for the lattice pricing kernels.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors. Any error aborts the whole valuation; there is no
//! partial result.

use pricer_core::types::{PricingError, StatisticsError};
use pricer_models::lattice::LatticeError;
use thiserror::Error;

/// Configuration error for the lattice pricers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Step limit above the hard cap.
    #[error("Invalid max steps {0}: must be in range [0, {max}]", max = super::config::MAX_STEPS)]
    InvalidMaxSteps(usize),
}

/// Runtime error from a lattice valuation.
///
/// # Examples
/// ```
/// use pricer_pricing::LatticePricingError;
///
/// let err = LatticePricingError::StepLimitExceeded { n_steps: 40, max_steps: 24 };
/// assert!(err.to_string().contains("40"));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LatticePricingError {
    /// Invalid parameters, arbitrage, or a degenerate lattice.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// Empty or non-positive trajectory reaching a mean.
    #[error(transparent)]
    Statistics(#[from] StatisticsError),

    /// Enumeration overflowed to infinity or NaN.
    #[error("Non-finite {quantity} ({value}): lattice prices exceed floating-point range")]
    NonFiniteResult {
        /// Name of the offending output
        quantity: &'static str,
        /// The computed value
        value: f64,
    },

    /// Step count above the configured limit.
    #[error("Step count {n_steps} exceeds configured maximum {max_steps}")]
    StepLimitExceeded {
        /// Requested number of steps
        n_steps: usize,
        /// Configured maximum
        max_steps: usize,
    },
}

impl From<LatticePricingError> for PricingError {
    fn from(err: LatticePricingError) -> Self {
        match err {
            LatticePricingError::Lattice(inner) => inner.into(),
            LatticePricingError::Statistics(inner) => inner.into(),
            LatticePricingError::NonFiniteResult { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            LatticePricingError::StepLimitExceeded { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}
