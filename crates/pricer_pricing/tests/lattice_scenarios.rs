//! End-to-end scenarios for the impact-lattice Asian pricers.
//!
//! Results are checked against a recursive reference that walks the tree
//! depth-first, independent of the bitmask enumeration used by the pricers.

use approx::assert_relative_eq;
use pricer_core::types::StatisticsError;
use pricer_models::lattice::LatticeError;
use pricer_pricing::{
    arithmetic_asian_bounds, price_arithmetic_asian, price_geometric_asian, LatticePricingError,
};
use proptest::prelude::*;

/// Which average the reference pays on.
#[derive(Clone, Copy)]
enum Average {
    Geometric,
    Arithmetic,
}

/// Undiscounted expected payoff by depth-first recursion over the tree.
#[allow(clippy::too_many_arguments)]
fn reference_expectation(
    price: f64,
    u: f64,
    d: f64,
    p: f64,
    strike: f64,
    remaining: usize,
    prices: &mut Vec<f64>,
    average: Average,
) -> f64 {
    prices.push(price);
    let value = if remaining == 0 {
        let n = prices.len() as f64;
        let avg = match average {
            Average::Geometric => (prices.iter().map(|s| s.ln()).sum::<f64>() / n).exp(),
            Average::Arithmetic => prices.iter().sum::<f64>() / n,
        };
        (avg - strike).max(0.0)
    } else {
        p * reference_expectation(price * u, u, d, p, strike, remaining - 1, prices, average)
            + (1.0 - p)
                * reference_expectation(price * d, u, d, p, strike, remaining - 1, prices, average)
    };
    prices.pop();
    value
}

/// Discounted reference price on a lattice with impact already applied.
fn reference_price(
    spot: f64,
    strike: f64,
    rate: f64,
    u_tilde: f64,
    d_tilde: f64,
    n_steps: usize,
    average: Average,
) -> f64 {
    let p = (rate - d_tilde) / (u_tilde - d_tilde);
    let mut prices = Vec::new();
    let expectation = reference_expectation(
        spot,
        u_tilde,
        d_tilde,
        p,
        strike,
        n_steps,
        &mut prices,
        average,
    );
    expectation / rate.powi(n_steps as i32)
}

// ============================================================================
// Degenerate and closed-form cases
// ============================================================================

#[test]
fn test_zero_steps_is_undiscounted_intrinsic() {
    let price = price_geometric_asian(105.0, 100.0, 1.05, 1.2, 0.8, 0.3, 2.0, 2.0, 0).unwrap();
    assert_eq!(price, 5.0);

    let bounds = arithmetic_asian_bounds(105.0, 100.0, 1.05, 1.2, 0.8, 0.3, 2.0, 2.0, 0).unwrap();
    assert_eq!(bounds.lower_bound, 5.0);
    assert_eq!(bounds.upper_bound, 5.0);
    assert_eq!(bounds.rho_star, 1.0);
    assert_eq!(bounds.eq_g, 105.0);
}

#[test]
fn test_single_step_crr() {
    // u = 1.2, d = 0.8, r = 1.05 => p = 0.625
    let price = price_geometric_asian(100.0, 100.0, 1.05, 1.2, 0.8, 0.0, 0.0, 0.0, 1).unwrap();
    let expected = 0.625 * ((100.0_f64 * 120.0).sqrt() - 100.0) / 1.05;
    assert_relative_eq!(price, expected, epsilon = 1e-12);
}

#[test]
fn test_zero_impact_matches_recursive_reference() {
    for n in 1..=8 {
        for strike in [80.0, 100.0, 120.0] {
            let price =
                price_geometric_asian(100.0, strike, 1.02, 1.1, 0.9, 0.0, 1.0, 1.0, n).unwrap();
            let expected = reference_price(100.0, strike, 1.02, 1.1, 0.9, n, Average::Geometric);
            assert_relative_eq!(price, expected, max_relative = 1e-10, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_impact_matches_recursive_reference() {
    let (impact, volume_up, volume_down): (f64, f64, f64) = (0.05, 1.5, 0.5);
    let u_tilde = 1.1 * (impact * volume_up).exp();
    let d_tilde = 0.9 * (-impact * volume_down).exp();

    for n in [2, 5, 9] {
        let price = price_geometric_asian(
            100.0, 100.0, 1.02, 1.1, 0.9, impact, volume_up, volume_down, n,
        )
        .unwrap();
        let expected = reference_price(100.0, 100.0, 1.02, u_tilde, d_tilde, n, Average::Geometric);
        assert_relative_eq!(price, expected, max_relative = 1e-10);

        let exact = price_arithmetic_asian(
            100.0, 100.0, 1.02, 1.1, 0.9, impact, volume_up, volume_down, n,
        )
        .unwrap();
        let expected =
            reference_price(100.0, 100.0, 1.02, u_tilde, d_tilde, n, Average::Arithmetic);
        assert_relative_eq!(exact, expected, max_relative = 1e-10);
    }
}

#[test]
fn test_impact_without_volume_is_plain_crr() {
    for n in [1, 4, 7] {
        let with_impact =
            price_geometric_asian(100.0, 95.0, 1.03, 1.15, 0.85, 0.4, 0.0, 0.0, n).unwrap();
        let without =
            price_geometric_asian(100.0, 95.0, 1.03, 1.15, 0.85, 0.0, 0.0, 0.0, n).unwrap();
        assert_eq!(with_impact, without);
    }
}

#[test]
fn test_impact_widens_lattice() {
    let plain = arithmetic_asian_bounds(100.0, 100.0, 1.02, 1.1, 0.9, 0.0, 1.0, 1.0, 6).unwrap();
    let impacted = arithmetic_asian_bounds(100.0, 100.0, 1.02, 1.1, 0.9, 0.1, 1.0, 1.0, 6).unwrap();
    assert!(impacted.rho_star > plain.rho_star);
}

// ============================================================================
// Error scenarios
// ============================================================================

#[test]
fn test_arbitrage_rate_yields_invalid_probability() {
    // r above u~ puts p outside [0, 1]
    let geometric = price_geometric_asian(100.0, 100.0, 1.3, 1.2, 0.8, 0.0, 0.0, 0.0, 3);
    assert!(matches!(
        geometric,
        Err(LatticePricingError::Lattice(LatticeError::InvalidProbability { .. }))
    ));

    let bounds = arithmetic_asian_bounds(100.0, 100.0, 0.7, 1.2, 0.8, 0.0, 0.0, 0.0, 3);
    assert!(matches!(
        bounds,
        Err(LatticePricingError::Lattice(LatticeError::InvalidProbability { .. }))
    ));
}

#[test]
fn test_non_positive_spot_is_rejected() {
    let result = price_geometric_asian(0.0, 100.0, 1.05, 1.2, 0.8, 0.0, 0.0, 0.0, 2);
    assert!(matches!(
        result,
        Err(LatticePricingError::Lattice(LatticeError::InvalidParameter { name: "spot", .. }))
    ));
}

#[test]
fn test_overflowing_impact_is_rejected_not_nan() {
    // λ·v_u = 1000 sends ũ to infinity
    let geometric = price_geometric_asian(100.0, 100.0, 1.05, 1.2, 0.8, 1000.0, 1.0, 0.0, 2);
    assert!(matches!(
        geometric,
        Err(LatticePricingError::Lattice(LatticeError::FactorOutOfRange { .. }))
    ));

    let bounds = arithmetic_asian_bounds(100.0, 100.0, 1.05, 1.2, 0.8, 1000.0, 1.0, 0.0, 2);
    assert!(matches!(
        bounds,
        Err(LatticePricingError::Lattice(LatticeError::FactorOutOfRange { .. }))
    ));

    let exact = price_arithmetic_asian(100.0, 100.0, 1.05, 1.2, 0.8, 1000.0, 1.0, 0.0, 2);
    assert!(exact.is_err());
}

#[test]
fn test_overflowing_trajectory_is_rejected_not_nan() {
    // ũ ≈ 5.5e299 is representable, its square is not
    let bounds = arithmetic_asian_bounds(100.0, 100.0, 1.05, 1.2, 0.8, 690.0, 1.0, 0.0, 2);
    assert!(matches!(
        bounds,
        Err(LatticePricingError::NonFiniteResult { .. })
    ));

    let exact = price_arithmetic_asian(100.0, 100.0, 1.05, 1.2, 0.8, 690.0, 1.0, 0.0, 2);
    assert!(matches!(
        exact,
        Err(LatticePricingError::NonFiniteResult { quantity: "price", .. })
    ));
}

#[test]
fn test_underflowing_trajectory_reports_non_positive_price() {
    // d̃ ≈ 1.3e-200 is positive, but the all-down path reaches 0 at step 2
    let geometric = price_geometric_asian(100.0, 100.0, 1.05, 1.2, 0.8, 460.0, 0.0, 1.0, 2);
    assert!(matches!(
        geometric,
        Err(LatticePricingError::Statistics(StatisticsError::NonPositivePrice { index: 2, .. }))
    ));

    let bounds = arithmetic_asian_bounds(100.0, 100.0, 1.05, 1.2, 0.8, 460.0, 0.0, 1.0, 2);
    assert!(matches!(
        bounds,
        Err(LatticePricingError::Statistics(StatisticsError::NonPositivePrice { .. }))
    ));
}

#[test]
fn test_default_step_limit() {
    let result = price_geometric_asian(100.0, 100.0, 1.05, 1.2, 0.8, 0.0, 0.0, 0.0, 25);
    assert!(matches!(
        result,
        Err(LatticePricingError::StepLimitExceeded {
            n_steps: 25,
            max_steps: 24
        })
    ));
}

// ============================================================================
// Bracketing property
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bounds_bracket_exact_arithmetic_price(
        spot in 50.0..150.0_f64,
        strike in 50.0..150.0_f64,
        rate in 1.0..1.1_f64,
        up in 1.11..1.5_f64,
        down in 0.6..0.99_f64,
        impact in 0.0..0.1_f64,
        volume_up in 0.0..2.0_f64,
        volume_down in 0.0..2.0_f64,
        n_steps in 0usize..9,
    ) {
        let bounds = arithmetic_asian_bounds(
            spot, strike, rate, up, down, impact, volume_up, volume_down, n_steps,
        ).unwrap();
        let exact = price_arithmetic_asian(
            spot, strike, rate, up, down, impact, volume_up, volume_down, n_steps,
        ).unwrap();

        let tolerance = 1e-9 * (1.0 + exact.abs());
        prop_assert!(bounds.rho_star >= 1.0);
        prop_assert!(bounds.lower_bound >= 0.0);
        prop_assert!(bounds.lower_bound <= exact + tolerance);
        prop_assert!(exact <= bounds.upper_bound + tolerance);
    }
}
