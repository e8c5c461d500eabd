use serde::Serialize;

use crate::{SimulationState, angle::wrap_phase};

/// The states produced by one run, in temporal order.
///
/// Entry `i` is the state after step `i + 1`, so a run of `T` steps yields
/// exactly `T` entries. The initial state is kept alongside as the origin and
/// is never an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    initial: SimulationState,
    time_step: f64,
    states: Vec<SimulationState>,
}

impl Trajectory {
    pub(crate) fn new(
        initial: SimulationState,
        time_step: f64,
        states: Vec<SimulationState>,
    ) -> Self {
        Self {
            initial,
            time_step,
            states,
        }
    }

    /// The state the run started from.
    #[must_use]
    pub fn initial(&self) -> &SimulationState {
        &self.initial
    }

    /// The fixed step between consecutive entries.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn states(&self) -> &[SimulationState] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationState> {
        self.states.iter()
    }

    /// The state after the final step, or `None` for a zero-step run.
    #[must_use]
    pub fn last(&self) -> Option<&SimulationState> {
        self.states.last()
    }

    /// The state the run ended in: the last entry, or the initial state when
    /// no steps were taken.
    #[must_use]
    pub fn final_state(&self) -> &SimulationState {
        self.states.last().unwrap_or(&self.initial)
    }

    /// Simulated time of each entry: `(i + 1) · dt`.
    #[allow(clippy::cast_precision_loss)]
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.states.len()).map(move |i| i as f64 * self.time_step)
    }

    pub fn magnitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(SimulationState::magnitude)
    }

    pub fn phases(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(SimulationState::phase)
    }

    /// The step from which the phase stays within `tolerance` of `target` for
    /// the rest of the run.
    ///
    /// Distance is measured around the circle. Steps are numbered from one.
    /// Returns `None` if the final entry is still outside the tolerance or the
    /// trajectory is empty.
    #[must_use]
    pub fn settling_step(&self, target: f64, tolerance: f64) -> Option<usize> {
        let within =
            |state: &SimulationState| wrap_phase(state.phase() - target).abs() <= tolerance;

        if !self.states.last().is_some_and(within) {
            return None;
        }
        let settled_from = self
            .states
            .iter()
            .rposition(|state| !within(state))
            .map_or(0, |i| i + 1);
        Some(settled_from + 1)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a SimulationState;
    type IntoIter = std::slice::Iter<'a, SimulationState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
