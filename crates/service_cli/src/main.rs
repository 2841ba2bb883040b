//! impact-asian CLI - Asian option pricing on the price-impact lattice
//!
//! This is the operational entry point for the lattice pricing kernels.
//!
//! # Commands
//!
//! - `impact-asian geometric` - Exact geometric-average Asian call price
//! - `impact-asian bounds` - Lower/upper bounds for the arithmetic-average call
//! - `impact-asian arithmetic` - Exact arithmetic-average price by enumeration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate resolves configuration,
//! installs logging and delegates to `pricer_pricing`. Results go to stdout,
//! logs to stderr.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pricer_pricing::LatticeConfig;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::{Context, LatticeArgs};
use config::{CliConfig, LogLevel, OutputFormat, DEFAULT_CONFIG_FILE};

/// Asian option pricing on the price-impact binomial lattice
#[derive(Parser)]
#[command(name = "impact-asian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Maximum number of lattice steps
    #[arg(long, global = true)]
    max_steps: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the geometric-average Asian call
    Geometric(LatticeArgs),

    /// Bound the arithmetic-average Asian call
    Bounds(LatticeArgs),

    /// Price the arithmetic-average Asian call exactly
    Arithmetic(LatticeArgs),
}

impl Cli {
    /// Resolve file and environment settings, then apply CLI flags on top.
    fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path, true)?,
            None => CliConfig::load(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };

        if self.verbose {
            config.log_level = LogLevel::Debug;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }

        Ok(config)
    }
}

fn init_tracing(level: LogLevel, force: bool) {
    let filter = if force {
        EnvFilter::new(level.as_filter_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_tracing(config.log_level, cli.verbose);
    debug!(?config, "resolved configuration");

    let ctx = Context {
        lattice: LatticeConfig::builder()
            .max_steps(config.max_steps)
            .build()?,
        format: config.format,
    };

    match &cli.command {
        Commands::Geometric(args) => commands::geometric::run(args, &ctx)?,
        Commands::Bounds(args) => commands::bounds::run(args, &ctx)?,
        Commands::Arithmetic(args) => commands::arithmetic::run(args, &ctx)?,
    }

    info!("done");
    Ok(())
}
