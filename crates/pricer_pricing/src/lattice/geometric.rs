//! Exact geometric-average Asian call on the impact lattice.
//!
//! # Mathematical Background
//!
//! For each of the `2^n` paths with trajectory `S_0, …, S_n`:
//!
//! ```text
//! G = (S_0 · S_1 · … · S_n)^(1/(n+1))
//! payoff = max(0, G - K)
//! ```
//!
//! and the option value is the discounted risk-neutral expectation
//!
//! ```text
//! V_G = r^(-n) · Σ_paths p^k (1-p)^(n-k) · payoff
//! ```
//!
//! # References
//!
//! - Cox, J. C., Ross, S. A. and Rubinstein, M. (1979). "Option Pricing:
//!   A Simplified Approach." Journal of Financial Economics, 7(3), 229-263.

use pricer_core::math::statistics::geometric_mean;
use pricer_models::instruments::AsianLatticeParams;
use tracing::debug;

use super::config::LatticeConfig;
use super::error::LatticePricingError;
use super::expectation::{ensure_finite, for_each_path, prepare};

/// Exact pricer for the geometric-average Asian call.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::AsianLatticeParams;
/// use pricer_pricing::GeometricAsianPricer;
///
/// let params = AsianLatticeParams::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .rate(1.05)
///     .up(1.2)
///     .down(0.8)
///     .n_steps(1)
///     .build()
///     .unwrap();
///
/// let price = GeometricAsianPricer::default().price(&params).unwrap();
/// let expected = 0.625 * ((100.0_f64 * 120.0).sqrt() - 100.0) / 1.05;
/// assert!((price - expected).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometricAsianPricer {
    config: LatticeConfig,
}

impl GeometricAsianPricer {
    /// Creates a pricer with the given configuration.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Returns the pricer configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Prices the geometric-average Asian call.
    ///
    /// # Errors
    ///
    /// - `LatticePricingError::Lattice` for invalid parameters, arbitrage
    ///   (`p ∉ [0, 1]`) or a degenerate lattice
    /// - `LatticePricingError::StepLimitExceeded` if `n_steps` exceeds the limit
    /// - `LatticePricingError::Statistics` if a trajectory is not positive
    pub fn price(&self, params: &AsianLatticeParams) -> Result<f64, LatticePricingError> {
        let factors = prepare(&self.config, params)?;

        let mut expected_payoff = 0.0;
        for_each_path(params, &factors, |probability, prices| {
            let g = geometric_mean(prices)?;
            expected_payoff += probability * params.payoff(g);
            Ok(())
        })?;

        let price = ensure_finite("price", expected_payoff * params.discount_factor())?;
        debug!(price, "priced geometric Asian call");
        Ok(price)
    }
}
