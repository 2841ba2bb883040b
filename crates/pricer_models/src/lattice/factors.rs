//! Impact-adjusted lattice factors.
//!
//! Every pricer in the workspace obtains its multipliers and probability
//! from [`LatticeFactors::derive`]; there is no second copy of the formula.

use super::error::LatticeError;

/// Up/down multipliers after price impact, with the implied risk-neutral
/// probability of an up move.
///
/// # Invariants
/// - `u_tilde > 0`, `d_tilde > 0`, `u_tilde != d_tilde`
/// - `0 <= p <= 1`
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeFactors;
///
/// // Plain CRR lattice: no impact
/// let factors = LatticeFactors::derive(1.05, 1.2, 0.8, 0.0, 0.0, 0.0).unwrap();
/// assert!((factors.p() - 0.625).abs() < 1e-12);
///
/// // r above ũ is an arbitrage
/// assert!(LatticeFactors::derive(1.30, 1.2, 0.8, 0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeFactors {
    /// Adjusted up factor (ũ)
    u_tilde: f64,
    /// Adjusted down factor (d̃)
    d_tilde: f64,
    /// Risk-neutral up probability (p)
    p: f64,
}

impl LatticeFactors {
    /// Derives impact-adjusted factors from raw market and impact parameters.
    ///
    /// ```text
    /// ũ = u · exp(λ · v_u)
    /// d̃ = d · exp(-λ · v_d)
    /// p = (r - d̃) / (ũ - d̃)
    /// ```
    ///
    /// # Arguments
    /// * `rate` - Gross risk-free rate per period (e.g. `1.05`)
    /// * `up` - Base up factor `u`
    /// * `down` - Base down factor `d`
    /// * `impact` - Price impact coefficient `λ`
    /// * `volume_up` - Hedging volume on an up move `v_u`
    /// * `volume_down` - Hedging volume on a down move `v_d`
    ///
    /// # Errors
    /// - `LatticeError::FactorOutOfRange` if `ũ` overflows or `d̃` underflows to zero
    /// - `LatticeError::DegenerateLattice` if `ũ == d̃`
    /// - `LatticeError::InvalidProbability` if `p ∉ [0, 1]`
    pub fn derive(
        rate: f64,
        up: f64,
        down: f64,
        impact: f64,
        volume_up: f64,
        volume_down: f64,
    ) -> Result<Self, LatticeError> {
        let u_tilde = up * (impact * volume_up).exp();
        let d_tilde = down * (-impact * volume_down).exp();
        Self::from_adjusted(rate, u_tilde, d_tilde)
    }

    /// Builds factors from already-adjusted multipliers.
    ///
    /// # Errors
    /// - `LatticeError::FactorOutOfRange` unless both factors are finite and positive
    /// - `LatticeError::DegenerateLattice` if `u_tilde == d_tilde`
    /// - `LatticeError::InvalidProbability` if `p ∉ [0, 1]` (including NaN)
    pub fn from_adjusted(rate: f64, u_tilde: f64, d_tilde: f64) -> Result<Self, LatticeError> {
        let in_range = |x: f64| x.is_finite() && x > 0.0;
        if !in_range(u_tilde) || !in_range(d_tilde) {
            return Err(LatticeError::FactorOutOfRange { u_tilde, d_tilde });
        }

        if u_tilde == d_tilde {
            return Err(LatticeError::DegenerateLattice { u_tilde, d_tilde });
        }

        let p = (rate - d_tilde) / (u_tilde - d_tilde);
        if !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::InvalidProbability { p });
        }

        Ok(Self {
            u_tilde,
            d_tilde,
            p,
        })
    }

    /// Returns the adjusted up factor ũ.
    #[inline]
    pub fn u_tilde(&self) -> f64 {
        self.u_tilde
    }

    /// Returns the adjusted down factor d̃.
    #[inline]
    pub fn d_tilde(&self) -> f64 {
        self.d_tilde
    }

    /// Returns the risk-neutral up probability p.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the down probability `1 - p`.
    #[inline]
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }

    /// Probability of one specific path with `n_ups` up moves and
    /// `n_downs` down moves: `p^n_ups · (1-p)^n_downs`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::lattice::LatticeFactors;
    ///
    /// let factors = LatticeFactors::derive(1.05, 1.2, 0.8, 0.0, 0.0, 0.0).unwrap();
    /// let prob = factors.path_probability(1, 1);
    /// assert!((prob - 0.625 * 0.375).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn path_probability(&self, n_ups: u32, n_downs: u32) -> f64 {
        self.p.powi(n_ups as i32) * self.q().powi(n_downs as i32)
    }
}
