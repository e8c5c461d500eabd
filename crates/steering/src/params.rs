use serde::Serialize;

use crate::ConfigError;

/// Immutable parameters for one simulation run.
///
/// Construct with [`ControlParameters::new`], which rejects any configuration
/// the step function cannot handle. A value of this type is always safe to
/// simulate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlParameters {
    target_phase: f64,
    steering_strength: f64,
    softness: f64,
    base_friction: f64,
    transparency_factor: f64,
    time_step: f64,
    step_count: usize,
}

impl ControlParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any real parameter is non-finite, if
    /// `steering_strength`, `base_friction`, or `transparency_factor` is
    /// negative, if `softness` is zero, or if `time_step` is not positive.
    pub fn new(
        target_phase: f64,
        steering_strength: f64,
        softness: f64,
        base_friction: f64,
        transparency_factor: f64,
        time_step: f64,
        step_count: usize,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("target_phase", target_phase),
            ("steering_strength", steering_strength),
            ("softness", softness),
            ("base_friction", base_friction),
            ("transparency_factor", transparency_factor),
            ("time_step", time_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        for (name, value) in [
            ("steering_strength", steering_strength),
            ("base_friction", base_friction),
            ("transparency_factor", transparency_factor),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }
        if softness == 0.0 {
            return Err(ConfigError::ZeroSoftness);
        }
        if time_step <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep);
        }

        Ok(Self {
            target_phase,
            steering_strength,
            softness,
            base_friction,
            transparency_factor,
            time_step,
            step_count,
        })
    }

    /// Phase `φ*` the control law steers toward.
    #[must_use]
    pub fn target_phase(&self) -> f64 {
        self.target_phase
    }

    /// Bound `k_s` on the magnitude of the control signal.
    #[must_use]
    pub fn steering_strength(&self) -> f64 {
        self.steering_strength
    }

    /// Error scale `σ` at which the control law saturates. Never zero.
    #[must_use]
    pub fn softness(&self) -> f64 {
        self.softness
    }

    /// Friction `κ₀` under zero control effort.
    #[must_use]
    pub fn base_friction(&self) -> f64 {
        self.base_friction
    }

    /// Rate `χ` at which friction decays with control effort.
    #[must_use]
    pub fn transparency_factor(&self) -> f64 {
        self.transparency_factor
    }

    /// Integration step `dt`. Always positive.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Number of steps `T` in a run.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Total simulated time, `T · dt`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn horizon(&self) -> f64 {
        self.step_count as f64 * self.time_step
    }

    /// Returns `self` with a different transparency factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `transparency_factor` is non-finite or negative.
    pub fn with_transparency_factor(self, transparency_factor: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.target_phase,
            self.steering_strength,
            self.softness,
            self.base_friction,
            transparency_factor,
            self.time_step,
            self.step_count,
        )
    }

    /// Returns `self` with a different steering strength.
    ///
    /// # Errors
    ///
    /// Returns an error if `steering_strength` is non-finite or negative.
    pub fn with_steering_strength(self, steering_strength: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.target_phase,
            steering_strength,
            self.softness,
            self.base_friction,
            self.transparency_factor,
            self.time_step,
            self.step_count,
        )
    }

    /// Returns `self` with a different step count.
    #[must_use]
    pub fn with_step_count(self, step_count: usize) -> Self {
        Self { step_count, ..self }
    }
}
