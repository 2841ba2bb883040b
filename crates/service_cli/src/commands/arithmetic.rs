//! Arithmetic command implementation
//!
//! Prices the arithmetic-average Asian call by full enumeration.

use pricer_pricing::ArithmeticAsianPricer;
use tracing::info;

use super::{Context, LatticeArgs};
use crate::output::render_price;
use crate::Result;

/// Compute and render the exact arithmetic Asian price.
pub fn render(args: &LatticeArgs, ctx: &Context) -> Result<String> {
    let params = args.to_params()?;
    let price = ArithmeticAsianPricer::new(ctx.lattice).price(&params)?;
    info!(price, n_steps = params.n_steps, "arithmetic Asian call priced");
    render_price("price", price, ctx.format)
}

/// Run the arithmetic command
pub fn run(args: &LatticeArgs, ctx: &Context) -> Result<()> {
    println!("{}", render(args, ctx)?);
    Ok(())
}
