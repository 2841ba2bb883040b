//! Mathematical utilities.
//!
//! - `statistics`: Means over price trajectories for path-dependent payoffs

pub mod statistics;
