//! Bounds command implementation
//!
//! Estimates lower and upper bounds for the arithmetic-average Asian call.

use pricer_pricing::ArithmeticBoundsEstimator;
use tracing::info;

use super::{Context, LatticeArgs};
use crate::output::render_bounds;
use crate::Result;

/// Compute and render the arithmetic bounds.
pub fn render(args: &LatticeArgs, ctx: &Context) -> Result<String> {
    let params = args.to_params()?;
    let bounds = ArithmeticBoundsEstimator::new(ctx.lattice).estimate(&params)?;
    info!(
        lower_bound = bounds.lower_bound,
        upper_bound = bounds.upper_bound,
        "arithmetic Asian bounds estimated"
    );
    render_bounds(&bounds, ctx.format)
}

/// Run the bounds command
pub fn run(args: &LatticeArgs, ctx: &Context) -> Result<()> {
    println!("{}", render(args, ctx)?);
    Ok(())
}
