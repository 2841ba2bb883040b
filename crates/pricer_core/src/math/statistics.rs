//! Averages over price trajectories.
//!
//! Asian payoffs depend on the mean of the observed prices rather than the
//! terminal price alone. This module provides the two averages used by the
//! lattice pricers:
//!
//! - **Geometric mean**: `exp(Σ ln xᵢ / m)`, accumulated in log space
//! - **Arithmetic mean**: `Σ xᵢ / m`
//!
//! For any strictly positive sequence the geometric mean never exceeds the
//! arithmetic mean (AM-GM).
//!
//! All functions use generic type parameter `T: num_traits::Float`.

use num_traits::Float;

use crate::types::StatisticsError;

/// Geometric mean of a strictly positive sequence.
///
/// # Mathematical Definition
/// ```text
/// G = (x₀ · x₁ · … · xₘ₋₁)^(1/m) = exp( (1/m) Σ ln xᵢ )
/// ```
///
/// The log-space form is used so that long trajectories do not overflow the
/// raw product. A single-element sequence returns that element unchanged.
///
/// # Errors
/// - `StatisticsError::EmptyInput` if `values` is empty
/// - `StatisticsError::NonPositivePrice` if any element is `<= 0` or NaN
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::geometric_mean;
///
/// let g = geometric_mean(&[4.0_f64, 9.0]).unwrap();
/// assert!((g - 6.0).abs() < 1e-12);
///
/// assert!(geometric_mean(&[1.0_f64, 0.0]).is_err());
/// ```
pub fn geometric_mean<T: Float>(values: &[T]) -> Result<T, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }

    let mut log_sum = T::zero();
    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() || value <= T::zero() {
            return Err(StatisticsError::NonPositivePrice {
                index,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        log_sum = log_sum + value.ln();
    }

    if values.len() == 1 {
        return Ok(values[0]);
    }

    Ok((log_sum / len_as::<T>(values.len())).exp())
}

/// Arithmetic mean of a sequence.
///
/// # Errors
/// - `StatisticsError::EmptyInput` if `values` is empty
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::arithmetic_mean;
///
/// let a = arithmetic_mean(&[100.0_f64, 120.0, 80.0]).unwrap();
/// assert!((a - 100.0).abs() < 1e-12);
/// ```
pub fn arithmetic_mean<T: Float>(values: &[T]) -> Result<T, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::EmptyInput);
    }

    let sum = values.iter().fold(T::zero(), |acc, &x| acc + x);
    Ok(sum / len_as::<T>(values.len()))
}

/// Sequence length as a float. `usize` always converts to a `Float`.
#[inline]
fn len_as<T: Float>(len: usize) -> T {
    T::from(len).unwrap_or_else(T::infinity)
}
