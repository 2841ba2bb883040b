//! Price trajectories along a lattice path.

use super::factors::LatticeFactors;
use super::paths::{Move, MoveSequence};

/// Expands move sequences into price trajectories.
///
/// For a path with `n` moves the trajectory has `n + 1` prices:
///
/// ```text
/// S_0 = spot
/// S_i = spot · ũ^(ups in steps 0..i) · d̃^(downs in steps 0..i)
/// ```
///
/// Each price is computed from the running up/down counts rather than by
/// repeated multiplication, so `S_i` is independent of the order in which
/// earlier moves occurred.
///
/// # Examples
/// ```
/// use pricer_models::lattice::{LatticeFactors, MoveSequence, PricePathBuilder};
///
/// let factors = LatticeFactors::derive(1.05, 1.2, 0.8, 0.0, 0.0, 0.0).unwrap();
/// let builder = PricePathBuilder::new(100.0, factors);
///
/// let up_down = MoveSequence::from_index(0b10, 2).unwrap();
/// let prices = builder.build(up_down);
/// assert_eq!(prices.len(), 3);
/// assert!((prices[1] - 120.0).abs() < 1e-12);
/// assert!((prices[2] - 96.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PricePathBuilder {
    spot: f64,
    factors: LatticeFactors,
}

impl PricePathBuilder {
    /// Creates a builder for paths starting at `spot`.
    pub fn new(spot: f64, factors: LatticeFactors) -> Self {
        Self { spot, factors }
    }

    /// Returns the initial price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the lattice factors.
    #[inline]
    pub fn factors(&self) -> &LatticeFactors {
        &self.factors
    }

    /// Builds the trajectory for `moves` into a new vector.
    pub fn build(&self, moves: MoveSequence) -> Vec<f64> {
        let mut prices = Vec::with_capacity(moves.len() + 1);
        self.build_into(moves, &mut prices);
        prices
    }

    /// Builds the trajectory for `moves` into `prices`, replacing its contents.
    ///
    /// Lets pricing loops reuse one buffer across all `2^n` paths.
    pub fn build_into(&self, moves: MoveSequence, prices: &mut Vec<f64>) {
        prices.clear();
        prices.reserve(moves.len() + 1);
        prices.push(self.spot);

        let (mut n_ups, mut n_downs) = (0i32, 0i32);
        for step in moves.moves() {
            match step {
                Move::Up => n_ups += 1,
                Move::Down => n_downs += 1,
            }
            let after_ups = self.spot * self.factors.u_tilde().powi(n_ups);
            prices.push(after_ups * self.factors.d_tilde().powi(n_downs));
        }
    }
}
