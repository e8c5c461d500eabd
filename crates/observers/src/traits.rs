//! Capability traits for cross-solver observers.
//!
//! # Event traits
//!
//! - [`HasStep`]: events that carry a step index
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use helm_core::Observer;
//! use helm_observers::traits::{CanStopEarly, HasStep};
//!
//! struct StopAt(usize);
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StopAt {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use helm_solvers::transient::euler;

/// An event that carries the index of the step that produced it.
pub trait HasStep {
    /// Returns the step index; `0` is the initial condition.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasStep for euler::Event<I, O> {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use helm_core::{Observer, Snapshot};

    struct StopAt(usize);

    impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StopAt {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.step() >= self.0).then(A::stop_early)
        }
    }

    fn event(step: usize) -> euler::Event<f64, f64> {
        euler::Event {
            step,
            snapshot: Snapshot::new(0.0, 0.0),
        }
    }

    #[test]
    fn euler_event_exposes_its_step() {
        assert_eq!(event(7).step(), 7);
    }

    #[test]
    fn generic_observer_stops_euler() {
        let mut observer = StopAt(3);

        let early: Option<euler::Action> = observer.observe(&event(2));
        let stop: Option<euler::Action> = observer.observe(&event(3));

        assert_eq!(early, None);
        assert_eq!(stop, Some(euler::Action::StopEarly));
    }
}
