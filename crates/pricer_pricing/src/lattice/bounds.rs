//! Bounds for the arithmetic-average Asian call.
//!
//! The arithmetic-average option has no closed form on the lattice, but it
//! is sandwiched by the geometric-average option:
//!
//! ```text
//! V_A >= V_G                                   (AM-GM: A >= G on every path)
//! V_A <= V_G + r^(-n) · (ρ* - 1) · E^Q[G]
//! ```
//!
//! with the global spread parameter
//!
//! ```text
//! ρ* = exp( (ũⁿ - d̃ⁿ)² / (4 · ũⁿ · d̃ⁿ) )
//! ```
//!
//! `ρ*` depends only on the terminal adjusted factors and `n`, never on an
//! individual path. `E^Q[G]` is accumulated undiscounted; the single
//! discount is applied when the upper bound is formed.

use pricer_core::math::statistics::geometric_mean;
use pricer_models::instruments::AsianLatticeParams;
use pricer_models::lattice::LatticeFactors;
use tracing::debug;

use super::config::LatticeConfig;
use super::error::LatticePricingError;
use super::expectation::{ensure_finite, for_each_path, prepare};

/// Lower/upper bounds for the arithmetic Asian call.
///
/// With the `serde` feature the expectation fields serialise as `EQ_G` and
/// `V0_G`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArithmeticBounds {
    /// Lower bound: the geometric option price `V_G`
    pub lower_bound: f64,
    /// Upper bound: `V_G + r^(-n) (ρ* - 1) E^Q[G]`
    pub upper_bound: f64,
    /// Spread parameter ρ*
    pub rho_star: f64,
    /// Undiscounted risk-neutral expectation of the geometric average
    #[cfg_attr(feature = "serde", serde(rename = "EQ_G"))]
    pub eq_g: f64,
    /// Geometric option price (equal to `lower_bound`)
    #[cfg_attr(feature = "serde", serde(rename = "V0_G"))]
    pub v0_g: f64,
}

impl ArithmeticBounds {
    /// Width of the bracket, `upper_bound - lower_bound`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Returns `true` if `price` lies inside the bracket.
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        self.lower_bound <= price && price <= self.upper_bound
    }
}

/// Spread parameter `ρ* = exp((ũⁿ - d̃ⁿ)² / (4 ũⁿ d̃ⁿ))`.
///
/// Always `>= 1`, with equality iff `ũⁿ == d̃ⁿ` (in particular for `n = 0`).
/// Step counts beyond `i32::MAX` saturate rather than wrap.
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeFactors;
/// use pricer_pricing::lattice::spread_multiplier;
///
/// let factors = LatticeFactors::derive(1.05, 1.2, 0.8, 0.0, 0.0, 0.0).unwrap();
/// assert_eq!(spread_multiplier(&factors, 0), 1.0);
/// assert!(spread_multiplier(&factors, 3) > 1.0);
/// ```
pub fn spread_multiplier(factors: &LatticeFactors, n_steps: usize) -> f64 {
    let n = i32::try_from(n_steps).unwrap_or(i32::MAX);
    let u_n = factors.u_tilde().powi(n);
    let d_n = factors.d_tilde().powi(n);
    let spread = (u_n - d_n).powi(2) / (4.0 * u_n * d_n);
    spread.exp()
}

/// Estimator for [`ArithmeticBounds`].
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::AsianLatticeParams;
/// use pricer_pricing::ArithmeticBoundsEstimator;
///
/// let params = AsianLatticeParams::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .rate(1.05)
///     .up(1.2)
///     .down(0.8)
///     .n_steps(4)
///     .build()
///     .unwrap();
///
/// let bounds = ArithmeticBoundsEstimator::default().estimate(&params).unwrap();
/// assert!(bounds.rho_star >= 1.0);
/// assert!(bounds.lower_bound <= bounds.upper_bound);
/// assert_eq!(bounds.v0_g, bounds.lower_bound);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticBoundsEstimator {
    config: LatticeConfig,
}

impl ArithmeticBoundsEstimator {
    /// Creates an estimator with the given configuration.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// Returns the estimator configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Computes the bounds.
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`GeometricAsianPricer::price`](super::GeometricAsianPricer::price).
    pub fn estimate(
        &self,
        params: &AsianLatticeParams,
    ) -> Result<ArithmeticBounds, LatticePricingError> {
        let factors = prepare(&self.config, params)?;
        let discount = params.discount_factor();

        let mut lower_bound = 0.0;
        let mut eq_g = 0.0;
        for_each_path(params, &factors, |probability, prices| {
            let g = geometric_mean(prices)?;
            lower_bound += probability * params.payoff(g);
            eq_g += probability * g;
            Ok(())
        })?;

        lower_bound *= discount;

        let rho_star = spread_multiplier(&factors, params.n_steps);
        let upper_bound = lower_bound + discount * (rho_star - 1.0) * eq_g;

        let lower_bound = ensure_finite("lower_bound", lower_bound)?;
        let eq_g = ensure_finite("EQ_G", eq_g)?;
        let rho_star = ensure_finite("rho_star", rho_star)?;
        let upper_bound = ensure_finite("upper_bound", upper_bound)?;

        debug!(
            lower_bound,
            upper_bound, rho_star, eq_g, "estimated arithmetic Asian bounds"
        );

        Ok(ArithmeticBounds {
            lower_bound,
            upper_bound,
            rho_star,
            eq_g,
            v0_g: lower_bound,
        })
    }
}
