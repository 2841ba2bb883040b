//! Lattice pricer configuration.
//!
//! Exhaustive enumeration doubles in cost with every step, so the step
//! count is checked against a configured limit before any path is visited.

use super::error::{ConfigError, LatticePricingError};

/// Default maximum number of lattice steps (`2^24 ≈ 1.7e7` paths).
pub const DEFAULT_MAX_STEPS: usize = 24;

/// Hard cap on the configurable step limit (`2^30 ≈ 1.1e9` paths).
pub const MAX_STEPS: usize = 30;

/// Lattice pricing configuration.
///
/// Use [`LatticeConfigBuilder`] to construct non-default instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::LatticeConfig;
///
/// let config = LatticeConfig::builder().max_steps(16).build().unwrap();
/// assert_eq!(config.max_steps(), 16);
///
/// assert_eq!(LatticeConfig::default().max_steps(), 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeConfig {
    max_steps: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl LatticeConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> LatticeConfigBuilder {
        LatticeConfigBuilder::default()
    }

    /// Returns the maximum number of steps a valuation may use.
    #[inline]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMaxSteps` if `max_steps > MAX_STEPS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps > MAX_STEPS {
            return Err(ConfigError::InvalidMaxSteps(self.max_steps));
        }
        Ok(())
    }

    /// Checks a requested step count against the limit.
    ///
    /// # Errors
    ///
    /// Returns `LatticePricingError::StepLimitExceeded` if `n_steps > max_steps`.
    pub fn check_steps(&self, n_steps: usize) -> Result<(), LatticePricingError> {
        if n_steps > self.max_steps {
            return Err(LatticePricingError::StepLimitExceeded {
                n_steps,
                max_steps: self.max_steps,
            });
        }
        Ok(())
    }
}

/// Builder for [`LatticeConfig`].
#[derive(Clone, Debug, Default)]
pub struct LatticeConfigBuilder {
    max_steps: Option<usize>,
}

impl LatticeConfigBuilder {
    /// Sets the maximum number of steps.
    ///
    /// # Arguments
    ///
    /// * `max_steps` - Step limit in [0, 30]
    #[inline]
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_steps` is above the hard cap.
    pub fn build(self) -> Result<LatticeConfig, ConfigError> {
        let config = LatticeConfig {
            max_steps: self.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
        };

        config.validate()?;
        Ok(config)
    }
}
