use std::{f64::consts::PI, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, ControlParameters, SimulationError, SimulationState, Simulator, Trajectory,
};

/// A named initial state and parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub initial: SimulationState,
    pub params: ControlParameters,
}

impl Scenario {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        initial: SimulationState,
        params: ControlParameters,
    ) -> Self {
        Self {
            name: name.into(),
            initial,
            params,
        }
    }

    /// Runs this scenario to completion.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run`].
    pub fn run(&self) -> Result<Trajectory, SimulationError> {
        Simulator::new(self.params).run(self.initial)
    }
}

/// Built-in scenarios.
///
/// Both start half-opposed to the target (`φ₀ = π − 0.6`, `φ* = 0`) with full
/// magnitude and steer with the same control law. They differ only in how
/// much control effort reduces friction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Friction falls off with control effort (`χ = 0.8`).
    Transparent,

    /// Friction ignores control effort (`χ = 0`).
    Opaque,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Transparent, Preset::Opaque];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Opaque => "opaque",
        }
    }

    #[must_use]
    pub fn transparency_factor(self) -> f64 {
        match self {
            Self::Transparent => 0.8,
            Self::Opaque => 0.0,
        }
    }

    /// The preset as a raw configuration.
    #[must_use]
    pub fn config(self) -> ScenarioConfig {
        ScenarioConfig {
            name: self.name().to_owned(),
            initial_magnitude: 1.0,
            initial_phase: PI - 0.6,
            target_phase: 0.0,
            steering_strength: 0.4,
            softness: 0.4,
            base_friction: 0.15,
            transparency_factor: self.transparency_factor(),
            time_step: 0.01,
            step_count: 2000,
        }
    }

    #[must_use]
    pub fn scenario(self) -> Scenario {
        // Known-good values, unwrap is safe
        self.config().into_scenario().unwrap()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_name() -> String {
    "custom".to_owned()
}

/// A scenario as it appears in a configuration file.
///
/// Fields mirror the simulation's inputs one to one. `step_count` is signed so
/// that a negative count is reported as a [`ConfigError`] rather than a parse
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub initial_magnitude: f64,
    pub initial_phase: f64,
    pub target_phase: f64,
    pub steering_strength: f64,
    pub softness: f64,
    pub base_friction: f64,
    pub transparency_factor: f64,
    pub time_step: f64,
    pub step_count: i64,
}

impl ScenarioConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn into_scenario(self) -> Result<Scenario, ConfigError> {
        let step_count = usize::try_from(self.step_count)
            .map_err(|_| ConfigError::NegativeStepCount(self.step_count))?;
        let params = ControlParameters::new(
            self.target_phase,
            self.steering_strength,
            self.softness,
            self.base_friction,
            self.transparency_factor,
            self.time_step,
            step_count,
        )?;
        let initial = SimulationState::new(self.initial_magnitude, self.initial_phase)?;

        Ok(Scenario::new(self.name, initial, params))
    }

    /// Validates and runs the configuration.
    ///
    /// Validation happens before the first step; an invalid configuration
    /// never produces a partial trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] for an invalid configuration.
    pub fn run(&self) -> Result<Trajectory, SimulationError> {
        self.clone().into_scenario()?.run()
    }
}
