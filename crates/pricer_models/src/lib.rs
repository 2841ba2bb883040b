//! # Pricer Models (L2: Business Logic)
//!
//! Binomial lattice with hedging price impact, and the Asian option
//! parameter record priced on it.
//!
//! This crate provides:
//! - Impact-adjusted lattice factors and the implied risk-neutral probability
//! - Exhaustive, deterministic enumeration of binary move sequences
//! - Price trajectories built from a move sequence
//! - Validated Asian option parameters
//!
//! ## Design Principles
//!
//! - **One factor derivation** shared by every pricer, so exact pricing and
//!   bound estimation can never drift apart
//! - **Iterative enumeration** by index bitmask (no recursion depth limits)
//! - **Builder pattern** for parameters with sensible defaults (zero impact)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod lattice;
