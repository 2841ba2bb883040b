//! Exhaustive enumeration of binary move sequences.
//!
//! An `n`-step lattice has exactly `2^n` paths. Path `k` is the binary
//! expansion of `k` over `n` bits, most significant bit first, with a set bit
//! meaning an up move. Enumerating `k = 0..2^n` therefore visits every path
//! once, in a fixed order, without recursion:
//!
//! ```text
//! n = 2:  k=0 → [D, D]   k=1 → [D, U]   k=2 → [U, D]   k=3 → [U, U]
//! ```
//!
//! The fixed order keeps floating-point summation (and rounding) identical
//! from run to run.
//!
//! # Complexity
//!
//! Consuming the enumerator costs `Θ(2^n · n)` time. Paths are packed into a
//! `u64`, so holding one costs `O(1)` memory and the iterator itself never
//! materialises the full set. Callers are expected to bound `n` (practically
//! `n <= 24`); nothing is truncated or approximated.

use super::error::LatticeError;

/// Largest `n` whose path indices fit in the `u64` enumeration index.
pub const MAX_ENUMERABLE_STEPS: usize = 63;

/// A single lattice move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Price multiplied by the down factor.
    Down,
    /// Price multiplied by the up factor.
    Up,
}

impl Move {
    /// Binary encoding: `1` for up, `0` for down.
    #[inline]
    pub fn as_bit(self) -> u8 {
        match self {
            Move::Down => 0,
            Move::Up => 1,
        }
    }
}

/// An ordered sequence of `n` moves, packed as a bitmask.
///
/// Bit `n-1-i` of `bits` holds step `i`, so the integer value of `bits`
/// is also the sequence's position in enumeration order.
///
/// # Examples
/// ```
/// use pricer_models::lattice::{Move, MoveSequence};
///
/// let seq = MoveSequence::from_index(0b110, 3).unwrap();
/// let moves: Vec<Move> = seq.moves().collect();
/// assert_eq!(moves, vec![Move::Up, Move::Up, Move::Down]);
/// assert_eq!(seq.n_ups(), 2);
/// assert_eq!(seq.n_downs(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    bits: u64,
    len: u32,
}

impl MoveSequence {
    /// Creates the sequence at position `index` among all `n_steps`-step paths.
    ///
    /// # Errors
    /// - `LatticeError::TooManySteps` if `n_steps > MAX_ENUMERABLE_STEPS`
    /// - `LatticeError::InvalidParameter` if `index >= 2^n_steps`
    pub fn from_index(index: u64, n_steps: usize) -> Result<Self, LatticeError> {
        let count = path_count(n_steps)?;
        if index >= count {
            return Err(LatticeError::InvalidParameter {
                name: "index",
                value: format!("{} is out of range for {} steps", index, n_steps),
            });
        }
        Ok(Self {
            bits: index,
            len: n_steps as u32,
        })
    }

    /// Number of moves `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` for the zero-step sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of this sequence in enumeration order.
    #[inline]
    pub fn index(&self) -> u64 {
        self.bits
    }

    /// Number of up moves.
    #[inline]
    pub fn n_ups(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Number of down moves.
    #[inline]
    pub fn n_downs(&self) -> u32 {
        self.len - self.n_ups()
    }

    /// Move taken at step `step` (0-based).
    ///
    /// # Panics
    /// Panics if `step >= self.len()`.
    #[inline]
    pub fn step(&self, step: usize) -> Move {
        assert!(step < self.len(), "step {} out of range", step);
        let shift = self.len as usize - 1 - step;
        if (self.bits >> shift) & 1 == 1 {
            Move::Up
        } else {
            Move::Down
        }
    }

    /// Iterates the moves from the first step to the last.
    pub fn moves(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        (0..self.len()).map(move |i| self.step(i))
    }

    /// Moves as `0`/`1` values (1 = up).
    pub fn to_bits(&self) -> Vec<u8> {
        self.moves().map(Move::as_bit).collect()
    }
}

/// Iterator over every `n`-step move sequence in ascending index order.
///
/// # Examples
/// ```
/// use pricer_models::lattice::PathEnumerator;
///
/// let paths: Vec<_> = PathEnumerator::new(3).unwrap().collect();
/// assert_eq!(paths.len(), 8);
///
/// // n = 0 yields the single empty path
/// assert_eq!(PathEnumerator::new(0).unwrap().count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PathEnumerator {
    n_steps: usize,
    next: u64,
    end: u64,
}

impl PathEnumerator {
    /// Creates an enumerator over all `2^n_steps` paths.
    ///
    /// # Errors
    /// - `LatticeError::TooManySteps` if `n_steps > MAX_ENUMERABLE_STEPS`
    pub fn new(n_steps: usize) -> Result<Self, LatticeError> {
        let end = path_count(n_steps)?;
        Ok(Self {
            n_steps,
            next: 0,
            end,
        })
    }

    /// Number of steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Total number of paths, `2^n`.
    #[inline]
    pub fn path_count(&self) -> u64 {
        self.end
    }
}

impl Iterator for PathEnumerator {
    type Item = MoveSequence;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let seq = MoveSequence {
            bits: self.next,
            len: self.n_steps as u32,
        };
        self.next += 1;
        Some(seq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// `2^n_steps`, or `TooManySteps` if it does not fit the index.
fn path_count(n_steps: usize) -> Result<u64, LatticeError> {
    if n_steps > MAX_ENUMERABLE_STEPS {
        return Err(LatticeError::TooManySteps {
            n_steps,
            max_steps: MAX_ENUMERABLE_STEPS,
        });
    }
    Ok(1u64 << n_steps)
}
