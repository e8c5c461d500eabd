use std::convert::Infallible;

use helm_core::Observer;
use helm_solvers::transient::euler;
use tracing::{debug, trace};

use crate::{
    ControlParameters, Evaluation, SimulationError, SimulationState, SteeringModel,
    SteeringProblem, StepEvent, Trajectory,
};

/// Runs the step function for a fixed number of steps.
///
/// The loop is unconditional: it always takes exactly
/// [`step_count`](ControlParameters::step_count) steps, even once the state has
/// converged. Observers see every step but cannot stop the run, since their
/// action type is [`Infallible`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    params: ControlParameters,
}

impl Simulator {
    #[must_use]
    pub fn new(params: ControlParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ControlParameters {
        &self.params
    }

    /// Runs from `initial` and returns the trajectory of post-step states.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Solver`] if integration fails. The steering
    /// model and problem are infallible, so a valid configuration always
    /// succeeds.
    pub fn run(&self, initial: SimulationState) -> Result<Trajectory, SimulationError> {
        self.run_observed(initial, ())
    }

    /// Runs from `initial`, reporting each completed step to `observer`.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run`].
    pub fn run_observed<Obs>(
        &self,
        initial: SimulationState,
        mut observer: Obs,
    ) -> Result<Trajectory, SimulationError>
    where
        Obs: Observer<StepEvent, Infallible>,
    {
        let params = self.params;
        let dt = params.time_step();
        let steps = params.step_count();

        debug!(
            steps,
            dt,
            target_phase = params.target_phase(),
            steering_strength = params.steering_strength(),
            transparency_factor = params.transparency_factor(),
            magnitude = initial.magnitude(),
            phase = initial.phase(),
            "starting run"
        );

        let model = SteeringModel::new(params);
        let solution = euler::solve(
            &model,
            &SteeringProblem,
            initial,
            dt,
            steps,
            |event: &euler::Event<SimulationState, Evaluation>| -> Option<euler::Action> {
                if event.step == 0 {
                    return None;
                }
                let step_event = StepEvent::new(event.step, dt, event.snapshot);
                trace!(
                    step = step_event.step,
                    magnitude = step_event.state.magnitude(),
                    phase = step_event.state.phase(),
                    "step"
                );
                if let Some(never) = observer.observe(&step_event) {
                    match never {}
                }
                None
            },
        )?;

        let states: Vec<SimulationState> = solution
            .into_stepped()
            .into_iter()
            .map(|snapshot| snapshot.input)
            .collect();
        let trajectory = Trajectory::new(initial, dt, states);

        let last = trajectory.final_state();
        debug!(
            steps = trajectory.len(),
            magnitude = last.magnitude(),
            phase = last.phase(),
            "run complete"
        );

        Ok(trajectory)
    }
}
