//! Instrument definitions priced on the impact lattice.
//!
//! - `asian`: Discretely monitored Asian call parameters

pub mod asian;

pub use asian::{AsianLatticeParams, AsianLatticeParamsBuilder};
