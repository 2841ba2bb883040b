//! CLI command implementations
//!
//! Each submodule implements one pricing command. All commands share the
//! lattice arguments in [`LatticeArgs`] and the resolved [`Context`].

pub mod arithmetic;
pub mod bounds;
pub mod geometric;

use clap::Args;
use pricer_models::instruments::AsianLatticeParams;
use pricer_models::lattice::LatticeError;
use pricer_pricing::LatticeConfig;

use crate::config::OutputFormat;

/// Option and lattice parameters common to every command
#[derive(Args, Debug, Clone)]
pub struct LatticeArgs {
    /// Initial stock price S0
    #[arg(long)]
    pub spot: f64,

    /// Strike price K
    #[arg(long)]
    pub strike: f64,

    /// Gross risk-free rate per period (e.g. 1.05)
    #[arg(long)]
    pub rate: f64,

    /// Base up factor u
    #[arg(long)]
    pub up: f64,

    /// Base down factor d
    #[arg(long)]
    pub down: f64,

    /// Price impact coefficient lambda
    #[arg(long, default_value_t = 0.0)]
    pub impact: f64,

    /// Hedging volume on an up move
    #[arg(long, default_value_t = 0.0)]
    pub volume_up: f64,

    /// Hedging volume on a down move
    #[arg(long, default_value_t = 0.0)]
    pub volume_down: f64,

    /// Number of lattice steps
    #[arg(short = 'n', long)]
    pub steps: usize,
}

impl LatticeArgs {
    /// Build validated pricer parameters.
    pub fn to_params(&self) -> Result<AsianLatticeParams, LatticeError> {
        AsianLatticeParams::builder()
            .spot(self.spot)
            .strike(self.strike)
            .rate(self.rate)
            .up(self.up)
            .down(self.down)
            .impact(self.impact)
            .volumes(self.volume_up, self.volume_down)
            .n_steps(self.steps)
            .build()
    }
}

/// Resolved settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Pricer configuration
    pub lattice: LatticeConfig,
    /// Output format
    pub format: OutputFormat,
}


#[cfg(test)]
mod tests {
    use super::test_support::args;
    use super::*;

    #[test]
    fn test_to_params() {
        let params = args(5).to_params().unwrap();
        assert_eq!(params.n_steps, 5);
        assert_eq!(params.impact, 0.1);
        assert_eq!(params.volume_down, 1.0);
    }

    #[test]
    fn test_to_params_rejects_bad_factors() {
        let mut bad = args(3);
        bad.up = 0.5;
        assert!(matches!(
            bad.to_params(),
            Err(LatticeError::InvalidParameter { name: "up", .. })
        ));
    }
}
