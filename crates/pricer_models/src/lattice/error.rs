//! Error types for lattice construction.
//!
//! This module provides:
//! - `LatticeError`: Errors from factor derivation, enumeration, and parameter validation

use pricer_core::types::PricingError;
use thiserror::Error;

/// Lattice errors.
///
/// # Variants
/// - `InvalidProbability`: Derived risk-neutral probability outside `[0, 1]`
/// - `DegenerateLattice`: Adjusted up and down factors coincide
/// - `FactorOutOfRange`: Adjusted factor overflowed, underflowed to zero, or is NaN
/// - `TooManySteps`: Path count does not fit the enumeration index
/// - `InvalidParameter`: Input outside the model's domain
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeError;
///
/// let err = LatticeError::InvalidProbability { p: 1.25 };
/// assert!(format!("{}", err).contains("1.25"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// No-arbitrage violation: `p ∉ [0, 1]`.
    #[error("Invalid risk-neutral probability: p = {p} must lie in [0, 1]")]
    InvalidProbability {
        /// The derived probability
        p: f64,
    },

    /// `ũ == d̃`, the probability is undefined.
    #[error("Degenerate lattice: adjusted up factor {u_tilde} equals adjusted down factor {d_tilde}")]
    DegenerateLattice {
        /// Adjusted up factor
        u_tilde: f64,
        /// Adjusted down factor
        d_tilde: f64,
    },

    /// `ũ` or `d̃` not a finite positive number.
    #[error("Adjusted factors out of range: up {u_tilde}, down {d_tilde}")]
    FactorOutOfRange {
        /// Adjusted up factor
        u_tilde: f64,
        /// Adjusted down factor
        d_tilde: f64,
    },

    /// Too many steps to index every path.
    #[error("Too many steps for exhaustive enumeration: n = {n_steps} (maximum {max_steps})")]
    TooManySteps {
        /// Requested number of steps
        n_steps: usize,
        /// Largest enumerable step count
        max_steps: usize,
    },

    /// Parameter outside the model's domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidProbability { .. } => PricingError::ModelFailure(err.to_string()),
            LatticeError::DegenerateLattice { .. } | LatticeError::FactorOutOfRange { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            LatticeError::TooManySteps { .. } | LatticeError::InvalidParameter { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probability_display() {
        let err = LatticeError::InvalidProbability { p: -0.5 };
        assert_eq!(
            format!("{}", err),
            "Invalid risk-neutral probability: p = -0.5 must lie in [0, 1]"
        );
    }

    #[test]
    fn test_degenerate_lattice_display() {
        let err = LatticeError::DegenerateLattice {
            u_tilde: 1.1,
            d_tilde: 1.1,
        };
        assert!(format!("{}", err).contains("Degenerate lattice"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = LatticeError::InvalidParameter {
            name: "spot",
            value: "must be positive, got -1".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'spot': must be positive, got -1"
        );
    }

    #[test]
    fn test_invalid_probability_to_pricing_error() {
        let pricing_err: PricingError = LatticeError::InvalidProbability { p: 2.0 }.into();
        assert!(matches!(pricing_err, PricingError::ModelFailure(_)));
    }

    #[test]
    fn test_degenerate_lattice_to_pricing_error() {
        let pricing_err: PricingError = LatticeError::DegenerateLattice {
            u_tilde: 1.0,
            d_tilde: 1.0,
        }
        .into();
        assert!(matches!(pricing_err, PricingError::NumericalInstability(_)));
    }

    #[test]
    fn test_factor_out_of_range_to_pricing_error() {
        let err = LatticeError::FactorOutOfRange {
            u_tilde: f64::INFINITY,
            d_tilde: 0.8,
        };
        assert!(err.to_string().contains("inf"));
        let pricing_err: PricingError = err.into();
        assert!(matches!(pricing_err, PricingError::NumericalInstability(_)));
    }

    #[test]
    fn test_too_many_steps_to_pricing_error() {
        let pricing_err: PricingError = LatticeError::TooManySteps {
            n_steps: 100,
            max_steps: 63,
        }
        .into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("100")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
