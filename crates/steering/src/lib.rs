//! Steered phase/magnitude simulation.
//!
//! A state carries a non-negative magnitude `ρ` and a phase `φ` in `(−π, π]`.
//! Each fixed time step a saturating control law steers the phase toward a
//! target, while the magnitude decays at a rate set by the phase misalignment
//! and by a friction that falls off with control effort:
//!
//! ```text
//! error = φ − φ*
//! u     = −k_s · tanh(error / σ)
//! κ     = κ₀ · exp(−χ · |u|)
//! φ'    = wrap(φ + u · dt)
//! ρ'    = max(0, ρ − κ · sin²(error / 2) · ρ · dt)
//! ```
//!
//! - [`step`] applies one update.
//! - [`Simulator`] runs a fixed number of steps and returns a [`Trajectory`].
//! - [`Preset`] and [`compare`] set up and contrast the built-in scenarios.
//! - [`config`] loads scenarios from TOML; [`output`] writes results.
//!
//! # Example
//!
//! ```
//! use helm_steering::{Preset, compare};
//!
//! let comparison = compare(Preset::Transparent.scenario(), Preset::Opaque.scenario())?;
//! assert!(comparison.summary().magnitude_gap > 0.0);
//! # Ok::<(), helm_steering::SimulationError>(())
//! ```

mod angle;
mod compare;
mod error;
mod event;
mod model;
mod params;
mod scenario;
mod simulator;
mod state;
mod step;
mod trajectory;

pub mod config;
pub mod laws;
pub mod output;

pub use angle::wrap_phase;
pub use compare::{
    Comparison, ComparisonSummary, Run, RunSummary, SETTLING_TOLERANCE, compare,
};
pub use error::{ConfigError, SimulationError};
pub use event::StepEvent;
pub use model::{Evaluation, SteeringModel, SteeringProblem};
pub use params::ControlParameters;
pub use scenario::{Preset, Scenario, ScenarioConfig};
pub use simulator::Simulator;
pub use state::{SimulationState, StateDerivative};
pub use step::step;
pub use trajectory::Trajectory;
