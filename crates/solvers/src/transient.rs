//! Fixed-step time integrators.
//!
//! - [`euler`]: explicit forward Euler with per-step observer events

pub mod euler;
