use std::convert::Infallible;

use helm_core::{DerivativeOf, Model, OdeProblem};
use serde::Serialize;

use crate::{
    ControlParameters, SimulationState, StateDerivative,
    laws::{control_signal, friction, misalignment, phase_error},
};

/// The control and loss quantities evaluated at one state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    /// Phase error `φ − φ*`.
    pub error: f64,

    /// Control signal `u`.
    pub control: f64,

    /// Friction `κ` under that control effort.
    pub friction: f64,

    /// Misalignment penalty `sin²(error / 2)`.
    pub misalignment: f64,
}

impl Evaluation {
    /// Rates of change implied by this evaluation at `state`.
    ///
    /// The phase moves at the control signal; the magnitude decays at
    /// `κ · sin²(error / 2) · ρ`.
    #[must_use]
    pub fn derivative(&self, state: &SimulationState) -> StateDerivative {
        StateDerivative {
            magnitude_rate: -self.friction * self.misalignment * state.magnitude(),
            phase_rate: self.control,
        }
    }
}

/// Evaluates the control law and friction at a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringModel {
    params: ControlParameters,
}

impl SteeringModel {
    #[must_use]
    pub fn new(params: ControlParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ControlParameters {
        &self.params
    }

    /// Evaluates every law against `state`.
    #[must_use]
    pub fn evaluate(&self, state: &SimulationState) -> Evaluation {
        let p = &self.params;
        let error = phase_error(state.phase(), p.target_phase());
        let control = control_signal(error, p.steering_strength(), p.softness());

        Evaluation {
            error,
            control,
            friction: friction(control, p.base_friction(), p.transparency_factor()),
            misalignment: misalignment(error),
        }
    }
}

impl Model for SteeringModel {
    type Input = SimulationState;
    type Output = Evaluation;
    type Error = Infallible;

    fn call(&self, input: &SimulationState) -> Result<Evaluation, Infallible> {
        Ok(self.evaluate(input))
    }
}

/// Wires [`SteeringModel`] into the Euler solver.
///
/// The model input is the state itself, so extracting and rebuilding it are
/// both copies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteeringProblem;

impl OdeProblem for SteeringProblem {
    type Input = SimulationState;
    type Output = Evaluation;
    type Delta = f64;
    type State = SimulationState;
    type Error = Infallible;

    fn state(&self, input: &SimulationState) -> Result<SimulationState, Infallible> {
        Ok(*input)
    }

    fn derivative(
        &self,
        input: &SimulationState,
        output: &Evaluation,
    ) -> Result<DerivativeOf<SimulationState, f64>, Infallible> {
        Ok(output.derivative(input))
    }

    fn build_input(
        &self,
        _base: &SimulationState,
        state: &SimulationState,
        _dt: &f64,
    ) -> Result<SimulationState, Infallible> {
        Ok(*state)
    }
}
