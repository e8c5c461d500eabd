//! Core traits and types for Helm.
//!
//! The simulation crates build on a small set of abstractions:
//!
//! - [`Model`]: a deterministic callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OdeProblem`]: adapts a model to a state that can be stepped by an
//!   integrator
//! - [`StepIntegrable`]: a state that knows how to apply its own derivative

mod model;
mod observer;
mod problem;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
