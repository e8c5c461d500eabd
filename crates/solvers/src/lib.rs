//! Solvers for Helm models.
//!
//! - [`transient`]: fixed-step time integration of [`OdeProblem`]s
//!
//! [`OdeProblem`]: helm_core::OdeProblem

pub mod transient;
