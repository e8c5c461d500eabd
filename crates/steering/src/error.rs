use helm_solvers::transient::euler;
use thiserror::Error;

/// A configuration that cannot be simulated.
///
/// Raised while building parameters or an initial state, so a bad
/// configuration is rejected before any step is taken.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("{0} must be non-negative")]
    Negative(&'static str),

    #[error("softness must be nonzero")]
    ZeroSoftness,

    #[error("time_step must be positive")]
    NonPositiveTimeStep,

    #[error("step_count must be non-negative, got {0}")]
    NegativeStepCount(i64),
}

/// Errors that can occur while running a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("integration failed: {0}")]
    Solver(#[from] euler::Error),
}
