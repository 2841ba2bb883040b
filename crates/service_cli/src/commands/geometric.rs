//! Geometric command implementation
//!
//! Prices the geometric-average Asian call exactly.

use pricer_pricing::GeometricAsianPricer;
use tracing::info;

use super::{Context, LatticeArgs};
use crate::output::render_price;
use crate::Result;

/// Compute and render the geometric Asian price.
pub fn render(args: &LatticeArgs, ctx: &Context) -> Result<String> {
    let params = args.to_params()?;
    let price = GeometricAsianPricer::new(ctx.lattice).price(&params)?;
    info!(price, n_steps = params.n_steps, "geometric Asian call priced");
    render_price("price", price, ctx.format)
}

/// Run the geometric command
pub fn run(args: &LatticeArgs, ctx: &Context) -> Result<()> {
    println!("{}", render(args, ctx)?);
    Ok(())
}
