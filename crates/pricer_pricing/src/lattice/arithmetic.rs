//! Exact arithmetic-average Asian call by full enumeration.
//!
//! Used as the reference value the bounds in [`super::bounds`] must
//! bracket. It is not part of the bound computation itself.

use pricer_core::math::statistics::arithmetic_mean;
use pricer_models::instruments::AsianLatticeParams;
use tracing::debug;

use super::config::LatticeConfig;
use super::error::LatticePricingError;
use super::expectation::{ensure_finite, for_each_path, prepare};

/// Exact pricer for the arithmetic-average Asian call.
///
/// ```text
/// V_A = r^(-n) · Σ_paths p^k (1-p)^(n-k) · max(0, A - K)
/// A   = (S_0 + S_1 + … + S_n) / (n + 1)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticAsianPricer {
    config: LatticeConfig,
}

impl ArithmeticAsianPricer {
    /// Creates a pricer with the given configuration.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Returns the pricer configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Prices the arithmetic-average Asian call.
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`GeometricAsianPricer::price`](super::GeometricAsianPricer::price).
    pub fn price(&self, params: &AsianLatticeParams) -> Result<f64, LatticePricingError> {
        let factors = prepare(&self.config, params)?;

        let mut expected_payoff = 0.0;
        for_each_path(params, &factors, |probability, prices| {
            let a = arithmetic_mean(prices)?;
            expected_payoff += probability * params.payoff(a);
            Ok(())
        })?;

        let price = ensure_finite("price", expected_payoff * params.discount_factor())?;
        debug!(price, "priced arithmetic Asian call");
        Ok(price)
    }
}
