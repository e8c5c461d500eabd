//! The control, friction, and loss laws.
//!
//! Each law is a pure function of already-computed quantities. A step reads
//! them all against the state as it was before the step.

/// Signed phase error: `phase − target`.
///
/// The difference is taken as-is, without wrapping.
#[must_use]
pub fn phase_error(phase: f64, target: f64) -> f64 {
    phase - target
}

/// Largest `f64` below one.
const SATURATION: f64 = 1.0 - f64::EPSILON / 2.0;

/// Saturating feedback: `u = −k · tanh(error / σ)`.
///
/// For a positive `steering_strength`, `|u|` stays strictly below it for every
/// finite error. `tanh` rounds to exactly one past `|x| ≈ 19`, so the factor is
/// held at the largest value below one. Near zero error the response is linear
/// with slope `−steering_strength / softness`.
#[must_use]
pub fn control_signal(error: f64, steering_strength: f64, softness: f64) -> f64 {
    -steering_strength * (error / softness).tanh().clamp(-SATURATION, SATURATION)
}

/// Friction under control effort: `κ = κ₀ · exp(−χ · |u|)`.
///
/// Equals `base_friction` when `u = 0`.
#[must_use]
pub fn friction(control: f64, base_friction: f64, transparency_factor: f64) -> f64 {
    base_friction * (-transparency_factor * control.abs()).exp()
}

/// Circular misalignment penalty: `sin²(error / 2)`, i.e. `(1 − cos error) / 2`.
///
/// Zero when aligned, one when fully opposed.
#[must_use]
pub fn misalignment(error: f64) -> f64 {
    (error / 2.0).sin().powi(2)
}
