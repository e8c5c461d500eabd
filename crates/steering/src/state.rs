use helm_core::StepIntegrable;
use serde::Serialize;

use crate::{ConfigError, angle::wrap_phase};

/// The evolving state: retained magnitude and a cyclic phase.
///
/// Both invariants hold for every value of this type:
///
/// - `magnitude ≥ 0`
/// - `phase ∈ (−π, π]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationState {
    magnitude: f64,
    phase: f64,
}

impl SimulationState {
    /// Creates a state, wrapping `phase` into `(−π, π]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-finite or `magnitude` is
    /// negative.
    pub fn new(magnitude: f64, phase: f64) -> Result<Self, ConfigError> {
        if !magnitude.is_finite() {
            return Err(ConfigError::NonFinite("initial_magnitude"));
        }
        if !phase.is_finite() {
            return Err(ConfigError::NonFinite("initial_phase"));
        }
        if magnitude < 0.0 {
            return Err(ConfigError::Negative("initial_magnitude"));
        }

        Ok(Self {
            magnitude,
            phase: wrap_phase(phase),
        })
    }

    /// Retained magnitude `ρ`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Phase `φ`, in `(−π, π]`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

/// Rates of change of a [`SimulationState`] per unit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDerivative {
    pub magnitude_rate: f64,
    pub phase_rate: f64,
}

/// Applies a derivative the way the simulation requires: the magnitude update
/// is clamped at zero and the phase update is wrapped.
impl StepIntegrable<f64> for SimulationState {
    type Derivative = StateDerivative;

    fn step(&self, derivative: StateDerivative, dt: f64) -> Self {
        Self {
            magnitude: (self.magnitude + derivative.magnitude_rate * dt).max(0.0),
            phase: wrap_phase(self.phase + derivative.phase_rate * dt),
        }
    }
}
