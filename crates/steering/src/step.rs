use helm_core::StepIntegrable;

use crate::{ControlParameters, SimulationState, SteeringModel};

/// Advances `state` by one time step.
///
/// Every quantity is computed from `state` as it was before the step:
///
/// 1. `error = φ − φ*`
/// 2. `u = −k_s · tanh(error / σ)`
/// 3. `κ = κ₀ · exp(−χ · |u|)`
/// 4. `φ' = wrap(φ + u · dt)`
/// 5. `ρ' = max(0, ρ − κ · sin²(error / 2) · ρ · dt)`
///
/// This is the same arithmetic the [`Simulator`](crate::Simulator) performs
/// through the Euler solver, so stepping by hand reproduces a trajectory bit
/// for bit.
#[must_use]
pub fn step(state: &SimulationState, params: &ControlParameters) -> SimulationState {
    let evaluation = SteeringModel::new(*params).evaluate(state);
    state.step(evaluation.derivative(state), params.time_step())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{PI, TAU};

    use approx::assert_relative_eq;

    fn params(target_phase: f64, base_friction: f64, time_step: f64) -> ControlParameters {
        ControlParameters::new(target_phase, 0.4, 0.4, base_friction, 0.8, time_step, 1).unwrap()
    }

    #[test]
    fn aligned_state_is_a_fixed_point() {
        for target in [0.0, 1.25, -2.5, PI] {
            let state = SimulationState::new(0.8, target).unwrap();
            let next = step(&state, &params(target, 0.15, 0.01));
            assert_eq!(next, state);
        }
    }

    #[test]
    fn phase_moves_toward_target() {
        let state = SimulationState::new(1.0, 1.0).unwrap();
        let next = step(&state, &params(0.0, 0.15, 0.01));

        let u = -0.4 * (1.0_f64 / 0.4).tanh();
        assert_relative_eq!(next.phase(), 1.0 + u * 0.01);
    }

    #[test]
    fn magnitude_follows_the_loss_law() {
        let state = SimulationState::new(1.0, 1.0).unwrap();
        let next = step(&state, &params(0.0, 0.15, 0.01));

        let u = -0.4 * (1.0_f64 / 0.4).tanh();
        let kappa = 0.15 * (-0.8 * u.abs()).exp();
        let loss = kappa * (0.5_f64).sin().powi(2) * 1.0 * 0.01;
        assert_relative_eq!(next.magnitude(), 1.0 - loss, epsilon = 1e-15);
        assert!(next.magnitude() < state.magnitude());
    }

    #[test]
    fn magnitude_never_grows() {
        let mut phase = -PI + 0.05;
        while phase <= PI {
            let state = SimulationState::new(1.0, phase).unwrap();
            let next = step(&state, &params(0.3, 0.15, 0.01));
            assert!(next.magnitude() <= state.magnitude());
            phase += 0.1;
        }
    }

    #[test]
    fn heavy_loss_clamps_to_zero() {
        let state = SimulationState::new(1.0, PI).unwrap();
        let next = step(&state, &params(0.0, 500.0, 0.01));

        assert_eq!(next.magnitude(), 0.0);
    }

    #[test]
    fn zero_magnitude_keeps_steering_phase() {
        let state = SimulationState::new(0.0, 2.0).unwrap();
        let next = step(&state, &params(0.0, 0.15, 0.01));

        assert_eq!(next.magnitude(), 0.0);
        assert!(next.phase() < 2.0);
    }

    #[test]
    fn large_step_wraps_phase() {
        // Target far outside the phase interval drives a large excursion.
        let state = SimulationState::new(1.0, -3.0).unwrap();
        let next = step(&state, &params(-40.0, 0.15, 100.0));

        assert!(next.phase() > -PI && next.phase() <= PI);
        let unwrapped = -3.0 + -0.4 * (37.0_f64 / 0.4).tanh() * 100.0;
        let turns = (next.phase() - unwrapped) / TAU;
        assert_relative_eq!(turns, turns.round(), epsilon = 1e-9);
    }
}
