//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Categorised errors surfaced to callers of the pricing layer
//! - `StatisticsError`: Errors from path statistics (means over price trajectories)

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every lower-level error in the workspace converts into one of these
/// categories so that hosts can branch on the failure mode without knowing
/// which layer produced it.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation cannot be carried out numerically
/// - `ModelFailure`: Model assumptions violated
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

/// Path statistics errors.
///
/// # Variants
/// - `EmptyInput`: A mean was requested over an empty sequence
/// - `NonPositivePrice`: A geometric mean met a value `<= 0` (or NaN)
///
/// # Examples
/// ```
/// use pricer_core::types::StatisticsError;
///
/// let err = StatisticsError::NonPositivePrice { index: 3, value: -1.0 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    /// Statistics invoked on an empty sequence.
    #[error("Cannot compute mean of an empty sequence")]
    EmptyInput,

    /// Sequence element that is not strictly positive.
    #[error("Non-positive price {value} at index {index}: geometric mean requires positive values")]
    NonPositivePrice {
        /// Position of the offending element
        index: usize,
        /// The offending value
        value: f64,
    },
}

impl From<StatisticsError> for PricingError {
    fn from(err: StatisticsError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::NumericalInstability("u~ == d~".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: u~ == d~");

        let err = PricingError::ModelFailure("arbitrage".to_string());
        assert_eq!(format!("{}", err), "Model failure: arbitrage");
    }

    #[test]
    fn test_empty_input_display() {
        let err = StatisticsError::EmptyInput;
        assert_eq!(format!("{}", err), "Cannot compute mean of an empty sequence");
    }

    #[test]
    fn test_non_positive_price_display() {
        let err = StatisticsError::NonPositivePrice {
            index: 2,
            value: 0.0,
        };
        assert_eq!(
            format!("{}", err),
            "Non-positive price 0 at index 2: geometric mean requires positive values"
        );
    }

    #[test]
    fn test_statistics_error_to_pricing_error() {
        let pricing_err: PricingError = StatisticsError::EmptyInput.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = StatisticsError::EmptyInput;
        let _: &dyn std::error::Error = &err;
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
