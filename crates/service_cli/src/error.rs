//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid lattice configuration (step limit out of range)
    #[error("Lattice configuration error: {0}")]
    LatticeConfig(#[from] pricer_pricing::ConfigError),

    /// Option parameters outside the model domain
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] pricer_models::lattice::LatticeError),

    /// Pricing failure
    #[error("Pricing error: {0}")]
    Pricing(#[from] pricer_pricing::LatticePricingError),

    /// JSON output error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
