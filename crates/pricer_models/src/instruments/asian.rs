//! Asian call parameters on the price-impact lattice.
//!
//! The nine scalar inputs of the lattice pricers are bundled into one
//! record so that the model domain is checked in a single place:
//!
//! | Field         | Symbol | Domain   |
//! |---------------|--------|----------|
//! | `spot`        | S₀     | `> 0`    |
//! | `strike`      | K      | `> 0`    |
//! | `rate`        | r      | `> 0` (gross, e.g. `1.05`) |
//! | `up`          | u      | `> down` |
//! | `down`        | d      | `> 0`    |
//! | `impact`      | λ      | `>= 0`   |
//! | `volume_up`   | v_u    | `>= 0`   |
//! | `volume_down` | v_d    | `>= 0`   |
//! | `n_steps`     | n      | `>= 0`   |

use crate::lattice::{LatticeError, LatticeFactors};

/// Inputs for pricing an Asian call on the impact lattice.
///
/// # Examples
/// ```
/// use pricer_models::instruments::AsianLatticeParams;
///
/// let params = AsianLatticeParams::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .rate(1.05)
///     .up(1.2)
///     .down(0.8)
///     .impact(0.1)
///     .volumes(1.0, 1.0)
///     .n_steps(3)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.n_steps, 3);
/// assert!(params.factors().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsianLatticeParams {
    /// Initial price (S₀)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Gross risk-free rate per period (r)
    pub rate: f64,
    /// Base up factor (u)
    pub up: f64,
    /// Base down factor (d)
    pub down: f64,
    /// Price impact coefficient (λ)
    pub impact: f64,
    /// Hedging volume on an up move (v_u)
    pub volume_up: f64,
    /// Hedging volume on a down move (v_d)
    pub volume_down: f64,
    /// Number of lattice steps (n)
    pub n_steps: usize,
}

impl AsianLatticeParams {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> AsianLatticeParamsBuilder {
        AsianLatticeParamsBuilder::default()
    }

    /// Checks every field against the model domain.
    ///
    /// Arbitrage (`p ∉ [0, 1]`) is not checked here; it is detected when
    /// the factors are derived.
    ///
    /// # Errors
    /// `LatticeError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), LatticeError> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_positive("rate", self.rate)?;
        require_positive("down", self.down)?;
        require_finite("up", self.up)?;
        if self.up <= self.down {
            return Err(LatticeError::InvalidParameter {
                name: "up",
                value: format!("must exceed down factor {}, got {}", self.down, self.up),
            });
        }
        require_non_negative("impact", self.impact)?;
        require_non_negative("volume_up", self.volume_up)?;
        require_non_negative("volume_down", self.volume_down)?;
        Ok(())
    }

    /// Derives the impact-adjusted lattice factors for these parameters.
    ///
    /// # Errors
    /// Propagates `LatticeError` from [`LatticeFactors::derive`].
    pub fn factors(&self) -> Result<LatticeFactors, LatticeError> {
        LatticeFactors::derive(
            self.rate,
            self.up,
            self.down,
            self.impact,
            self.volume_up,
            self.volume_down,
        )
    }

    /// Discount factor over the full horizon, `r^(-n)`.
    ///
    /// Step counts beyond `i32::MAX` saturate rather than wrap.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        self.rate.powi(-saturating_exponent(self.n_steps))
    }

    /// Payoff of the call on an average `average`: `max(0, average - K)`.
    #[inline]
    pub fn payoff(&self, average: f64) -> f64 {
        (average - self.strike).max(0.0)
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), LatticeError> {
    if !value.is_finite() {
        return Err(LatticeError::InvalidParameter {
            name,
            value: format!("must be finite, got {}", value),
        });
    }
    Ok(())
}

fn require_positive(name: &'static str, value: f64) -> Result<(), LatticeError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(LatticeError::InvalidParameter {
            name,
            value: format!("must be positive, got {}", value),
        });
    }
    Ok(())
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), LatticeError> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(LatticeError::InvalidParameter {
            name,
            value: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

/// Builder for [`AsianLatticeParams`].
///
/// Impact and hedging volumes default to zero (plain CRR lattice); every
/// other field must be set.
#[derive(Clone, Debug, Default)]
pub struct AsianLatticeParamsBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    rate: Option<f64>,
    up: Option<f64>,
    down: Option<f64>,
    impact: f64,
    volume_up: f64,
    volume_down: f64,
    n_steps: Option<usize>,
}

impl AsianLatticeParamsBuilder {
    /// Sets the initial price S₀.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike K.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the gross per-period rate r.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the base up factor u.
    #[inline]
    pub fn up(mut self, up: f64) -> Self {
        self.up = Some(up);
        self
    }

    /// Sets the base down factor d.
    #[inline]
    pub fn down(mut self, down: f64) -> Self {
        self.down = Some(down);
        self
    }

    /// Sets the price impact coefficient λ.
    #[inline]
    pub fn impact(mut self, impact: f64) -> Self {
        self.impact = impact;
        self
    }

    /// Sets the hedging volumes on up and down moves.
    #[inline]
    pub fn volumes(mut self, volume_up: f64, volume_down: f64) -> Self {
        self.volume_up = volume_up;
        self.volume_down = volume_down;
        self
    }

    /// Sets the number of lattice steps n.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    /// `LatticeError::InvalidParameter` if a required field is missing or
    /// any field is outside the model domain.
    pub fn build(self) -> Result<AsianLatticeParams, LatticeError> {
        let params = AsianLatticeParams {
            spot: required("spot", self.spot)?,
            strike: required("strike", self.strike)?,
            rate: required("rate", self.rate)?,
            up: required("up", self.up)?,
            down: required("down", self.down)?,
            impact: self.impact,
            volume_up: self.volume_up,
            volume_down: self.volume_down,
            n_steps: required("n_steps", self.n_steps)?,
        };

        params.validate()?;
        Ok(params)
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T, LatticeError> {
    value.ok_or_else(|| LatticeError::InvalidParameter {
        name,
        value: "must be specified".to_string(),
    })
}

/// `n` as a `powi` exponent, saturating at `i32::MAX`.
fn saturating_exponent(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
