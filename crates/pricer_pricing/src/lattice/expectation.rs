//! Risk-neutral expectation over every lattice path.
//!
//! Shared by all pricers: validate, derive factors once, then hand each
//! path's probability and trajectory to a visitor. Paths are visited in
//! enumeration order and one trajectory buffer is reused throughout.

use pricer_models::instruments::AsianLatticeParams;
use pricer_models::lattice::{LatticeFactors, PathEnumerator, PricePathBuilder};
use tracing::{debug, trace};

use super::config::LatticeConfig;
use super::error::LatticePricingError;

/// Validates `params` against the model domain and `config`, and derives the
/// lattice factors.
pub(crate) fn prepare(
    config: &LatticeConfig,
    params: &AsianLatticeParams,
) -> Result<LatticeFactors, LatticePricingError> {
    params.validate()?;
    config.check_steps(params.n_steps)?;

    let factors = params.factors()?;
    debug!(
        u_tilde = factors.u_tilde(),
        d_tilde = factors.d_tilde(),
        p = factors.p(),
        n_steps = params.n_steps,
        "derived impact lattice factors"
    );
    Ok(factors)
}

/// Calls `visit(probability, trajectory)` for each of the `2^n` paths.
///
/// The first error returned by `visit` stops the walk and is propagated.
pub(crate) fn for_each_path<F>(
    params: &AsianLatticeParams,
    factors: &LatticeFactors,
    mut visit: F,
) -> Result<(), LatticePricingError>
where
    F: FnMut(f64, &[f64]) -> Result<(), LatticePricingError>,
{
    let paths = PathEnumerator::new(params.n_steps)?;
    trace!(paths = paths.path_count(), "enumerating lattice paths");

    let builder = PricePathBuilder::new(params.spot, *factors);
    let mut prices = Vec::with_capacity(params.n_steps + 1);

    for moves in paths {
        builder.build_into(moves, &mut prices);
        let probability = factors.path_probability(moves.n_ups(), moves.n_downs());
        visit(probability, &prices)?;
    }

    Ok(())
}

/// Returns `value` if finite, otherwise `NonFiniteResult` naming `quantity`.
///
/// Finite factors can still overflow over many steps, and a zero path
/// probability times an infinite payoff is NaN.
pub(crate) fn ensure_finite(
    quantity: &'static str,
    value: f64,
) -> Result<f64, LatticePricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LatticePricingError::NonFiniteResult { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(n_steps: usize) -> AsianLatticeParams {
        AsianLatticeParams::builder()
            .spot(100.0)
            .strike(100.0)
            .rate(1.05)
            .up(1.2)
            .down(0.8)
            .n_steps(n_steps)
            .build()
            .unwrap()
    }

    #[test]
    fn test_visits_every_path_once() {
        let params = params(5);
        let factors = prepare(&LatticeConfig::default(), &params).unwrap();

        let mut visits = 0;
        let mut mass = 0.0;
        for_each_path(&params, &factors, |probability, prices| {
            assert_eq!(prices.len(), 6);
            visits += 1;
            mass += probability;
            Ok(())
        })
        .unwrap();

        assert_eq!(visits, 32);
        assert_relative_eq!(mass, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        let params = params(4);
        let factors = prepare(&LatticeConfig::default(), &params).unwrap();

        let mut visits = 0;
        let result = for_each_path(&params, &factors, |_, _| {
            visits += 1;
            if visits == 3 {
                return Err(pricer_core::types::StatisticsError::EmptyInput.into());
            }
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(visits, 3);
    }

    #[test]
    fn test_prepare_rejects_step_limit() {
        let config = LatticeConfig::builder().max_steps(3).build().unwrap();
        assert!(matches!(
            prepare(&config, &params(4)),
            Err(LatticePricingError::StepLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("price", 1.5), Ok(1.5));
        assert!(matches!(
            ensure_finite("price", f64::NAN),
            Err(LatticePricingError::NonFiniteResult { quantity: "price", .. })
        ));
        assert!(ensure_finite("rho_star", f64::INFINITY).is_err());
    }

    #[test]
    fn test_prepare_rejects_invalid_params() {
        let mut bad = params(2);
        bad.spot = -1.0;
        assert!(matches!(
            prepare(&LatticeConfig::default(), &bad),
            Err(LatticePricingError::Lattice(_))
        ));
    }
}
