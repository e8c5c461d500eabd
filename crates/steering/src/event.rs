use helm_core::Snapshot;
use helm_observers::traits::HasStep;
use serde::Serialize;

use crate::{Evaluation, SimulationState};

/// Emitted by the [`Simulator`](crate::Simulator) after each completed step.
///
/// `evaluation` holds the laws evaluated at the new `state`, which is what the
/// following step will act on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepEvent {
    /// Step number, starting at one.
    pub step: usize,

    /// Simulated time at the end of the step.
    pub time: f64,

    pub state: SimulationState,

    pub evaluation: Evaluation,
}

impl StepEvent {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new(
        step: usize,
        time_step: f64,
        snapshot: Snapshot<SimulationState, Evaluation>,
    ) -> Self {
        Self {
            step,
            time: step as f64 * time_step,
            state: snapshot.input,
            evaluation: snapshot.output,
        }
    }
}

impl HasStep for StepEvent {
    fn step(&self) -> usize {
        self.step
    }
}

/// Plots magnitude and phase against time.
#[cfg(feature = "plot")]
impl helm_observers::Plottable<2> for StepEvent {
    fn x(&self) -> Option<f64> {
        Some(self.time)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.state.magnitude()), Some(self.state.phase())]
    }
}
