//! Asian option pricing on the price-impact binomial lattice.
//!
//! # Pricers
//!
//! - [`GeometricAsianPricer`]: exact geometric-average call
//! - [`ArithmeticBoundsEstimator`]: lower/upper bounds for the arithmetic-average call
//! - [`ArithmeticAsianPricer`]: exact arithmetic-average call (reference)
//!
//! # Scalar Entry Points
//!
//! ```rust
//! use pricer_pricing::lattice::{arithmetic_asian_bounds, price_arithmetic_asian};
//!
//! let bounds = arithmetic_asian_bounds(100.0, 100.0, 1.05, 1.2, 0.8, 0.1, 1.0, 1.0, 6).unwrap();
//! let exact = price_arithmetic_asian(100.0, 100.0, 1.05, 1.2, 0.8, 0.1, 1.0, 1.0, 6).unwrap();
//!
//! assert!(bounds.contains(exact));
//! ```

pub mod arithmetic;
pub mod bounds;
pub mod config;
pub mod error;
mod expectation;
pub mod geometric;

pub use arithmetic::ArithmeticAsianPricer;
pub use bounds::{spread_multiplier, ArithmeticBounds, ArithmeticBoundsEstimator};
pub use config::{LatticeConfig, LatticeConfigBuilder, DEFAULT_MAX_STEPS, MAX_STEPS};
pub use error::{ConfigError, LatticePricingError};
pub use geometric::GeometricAsianPricer;

use pricer_models::instruments::AsianLatticeParams;

/// Collects the nine scalar inputs into a parameter record.
///
/// Validation happens inside the pricers.
#[allow(clippy::too_many_arguments)]
fn scalar_params(
    spot: f64,
    strike: f64,
    rate: f64,
    up: f64,
    down: f64,
    impact: f64,
    volume_up: f64,
    volume_down: f64,
    n_steps: usize,
) -> AsianLatticeParams {
    AsianLatticeParams {
        spot,
        strike,
        rate,
        up,
        down,
        impact,
        volume_up,
        volume_down,
        n_steps,
    }
}

/// Exact price of the geometric-average Asian call.
///
/// # Arguments
///
/// * `spot` - Initial stock price S₀ (positive)
/// * `strike` - Strike price K (positive)
/// * `rate` - Gross risk-free rate per period (e.g. `1.05` for 5%)
/// * `up` - Base up factor u
/// * `down` - Base down factor d (`0 < d < u`)
/// * `impact` - Price impact coefficient λ (non-negative)
/// * `volume_up` - Hedging volume on an up move (non-negative)
/// * `volume_down` - Hedging volume on a down move (non-negative)
/// * `n_steps` - Number of lattice steps (at most [`DEFAULT_MAX_STEPS`])
///
/// # Errors
///
/// See [`GeometricAsianPricer::price`].
#[allow(clippy::too_many_arguments)]
pub fn price_geometric_asian(
    spot: f64,
    strike: f64,
    rate: f64,
    up: f64,
    down: f64,
    impact: f64,
    volume_up: f64,
    volume_down: f64,
    n_steps: usize,
) -> Result<f64, LatticePricingError> {
    let params = scalar_params(
        spot,
        strike,
        rate,
        up,
        down,
        impact,
        volume_up,
        volume_down,
        n_steps,
    );
    GeometricAsianPricer::default().price(&params)
}

/// Lower/upper bounds for the arithmetic-average Asian call.
///
/// Arguments as for [`price_geometric_asian`].
///
/// # Errors
///
/// See [`ArithmeticBoundsEstimator::estimate`].
#[allow(clippy::too_many_arguments)]
pub fn arithmetic_asian_bounds(
    spot: f64,
    strike: f64,
    rate: f64,
    up: f64,
    down: f64,
    impact: f64,
    volume_up: f64,
    volume_down: f64,
    n_steps: usize,
) -> Result<ArithmeticBounds, LatticePricingError> {
    let params = scalar_params(
        spot,
        strike,
        rate,
        up,
        down,
        impact,
        volume_up,
        volume_down,
        n_steps,
    );
    ArithmeticBoundsEstimator::default().estimate(&params)
}

/// Exact price of the arithmetic-average Asian call.
///
/// Arguments as for [`price_geometric_asian`].
///
/// # Errors
///
/// See [`ArithmeticAsianPricer::price`].
#[allow(clippy::too_many_arguments)]
pub fn price_arithmetic_asian(
    spot: f64,
    strike: f64,
    rate: f64,
    up: f64,
    down: f64,
    impact: f64,
    volume_up: f64,
    volume_down: f64,
    n_steps: usize,
) -> Result<f64, LatticePricingError> {
    let params = scalar_params(
        spot,
        strike,
        rate,
        up,
        down,
        impact,
        volume_up,
        volume_down,
        n_steps,
    );
    ArithmeticAsianPricer::default().price(&params)
}
