use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::{Scenario, SimulationError, Trajectory};

/// Phase tolerance used to decide when a run has settled on its target.
pub const SETTLING_TOLERANCE: f64 = 0.05;

/// One finished scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub scenario: Scenario,
    pub trajectory: Trajectory,
}

impl Run {
    /// Runs `scenario` to completion.
    ///
    /// # Errors
    ///
    /// See [`Scenario::run`].
    pub fn execute(scenario: Scenario) -> Result<Self, SimulationError> {
        let trajectory = scenario.run()?;
        Ok(Self {
            scenario,
            trajectory,
        })
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let end = self.trajectory.final_state();
        RunSummary {
            name: self.scenario.name.clone(),
            steps: self.trajectory.len(),
            initial_magnitude: self.trajectory.initial().magnitude(),
            final_magnitude: end.magnitude(),
            final_phase: end.phase(),
            settling_step: self
                .trajectory
                .settling_step(self.scenario.params.target_phase(), SETTLING_TOLERANCE),
        }
    }
}

/// Headline numbers for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub steps: usize,
    pub initial_magnitude: f64,
    pub final_magnitude: f64,
    pub final_phase: f64,

    /// First step from which the phase stays within [`SETTLING_TOLERANCE`]
    /// of the target.
    pub settling_step: Option<usize>,
}

impl RunSummary {
    /// Share of the initial magnitude still present at the end, or `None` when
    /// the run started from zero.
    #[must_use]
    pub fn retained(&self) -> Option<f64> {
        (self.initial_magnitude > 0.0).then(|| self.final_magnitude / self.initial_magnitude)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} steps={:<6} magnitude={:.6}",
            self.name, self.steps, self.final_magnitude
        )?;
        if let Some(retained) = self.retained() {
            write!(f, " ({:.2}%)", retained * 100.0)?;
        }
        write!(f, " phase={:+.6}", self.final_phase)?;
        match self.settling_step {
            Some(step) => write!(f, " settled@{step}"),
            None => f.write_str(" unsettled"),
        }
    }
}

/// Two runs from the same engine, side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub baseline: Run,
    pub alternative: Run,
}

impl Comparison {
    #[must_use]
    pub fn summary(&self) -> ComparisonSummary {
        let baseline = self.baseline.summary();
        let alternative = self.alternative.summary();
        ComparisonSummary {
            magnitude_gap: baseline.final_magnitude - alternative.final_magnitude,
            baseline,
            alternative,
        }
    }
}

/// Headline numbers for a [`Comparison`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub baseline: RunSummary,
    pub alternative: RunSummary,

    /// Baseline final magnitude minus alternative final magnitude. Positive
    /// when the baseline retains more.
    pub magnitude_gap: f64,
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "baseline     {}", self.baseline)?;
        writeln!(f, "alternative  {}", self.alternative)?;
        write!(f, "magnitude gap {:+.6}", self.magnitude_gap)
    }
}

/// Runs two scenarios and pairs their results.
///
/// The scenarios go through the same simulator; any difference in outcome
/// comes from their configurations.
///
/// # Errors
///
/// Returns the first error from either run.
pub fn compare(baseline: Scenario, alternative: Scenario) -> Result<Comparison, SimulationError> {
    let comparison = Comparison {
        baseline: Run::execute(baseline)?,
        alternative: Run::execute(alternative)?,
    };

    let summary = comparison.summary();
    info!(
        baseline = %summary.baseline.name,
        alternative = %summary.alternative.name,
        gap = summary.magnitude_gap,
        "comparison complete"
    );

    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ControlParameters, Preset, SimulationState};

    #[test]
    fn transparent_retains_more_than_opaque() {
        let comparison =
            compare(Preset::Transparent.scenario(), Preset::Opaque.scenario()).unwrap();
        let summary = comparison.summary();

        assert!(summary.magnitude_gap > 0.0);
        assert_eq!(summary.baseline.steps, 2000);
        assert!(summary.baseline.settling_step.is_some());
        assert!(summary.alternative.settling_step.is_some());
    }

    #[test]
    fn gap_is_baseline_minus_alternative() {
        let forward = compare(Preset::Transparent.scenario(), Preset::Opaque.scenario())
            .unwrap()
            .summary();
        assert_eq!(
            forward.magnitude_gap,
            forward.baseline.final_magnitude - forward.alternative.final_magnitude
        );

        let reversed = compare(Preset::Opaque.scenario(), Preset::Transparent.scenario())
            .unwrap()
            .summary();
        assert_eq!(reversed.baseline.name, "opaque");
        assert!(reversed.magnitude_gap < 0.0);
        assert_eq!(reversed.magnitude_gap, -forward.magnitude_gap);
    }

    #[test]
    fn identical_scenarios_have_no_gap() {
        let comparison =
            compare(Preset::Opaque.scenario(), Preset::Opaque.scenario()).unwrap();

        assert_eq!(comparison.summary().magnitude_gap, 0.0);
        assert_eq!(comparison.baseline.trajectory, comparison.alternative.trajectory);
    }

    #[test]
    fn retained_is_undefined_from_zero() {
        let scenario = Scenario::new(
            "empty",
            SimulationState::new(0.0, 1.0).unwrap(),
            ControlParameters::new(0.0, 0.4, 0.4, 0.15, 0.8, 0.01, 10).unwrap(),
        );
        let summary = Run::execute(scenario).unwrap().summary();

        assert_eq!(summary.retained(), None);
        assert_eq!(summary.final_magnitude, 0.0);
    }

    #[test]
    fn summary_display_mentions_both_runs() {
        let comparison =
            compare(Preset::Transparent.scenario(), Preset::Opaque.scenario()).unwrap();
        let text = comparison.summary().to_string();

        assert!(text.contains("transparent"));
        assert!(text.contains("opaque"));
        assert!(text.contains("magnitude gap +"));
    }
}
