//! Forward Euler integration for ODE problems.
//!
//! Advances a model through time with the explicit rule
//!
//! ```text
//! state_{n+1} = state_n.step(derivative_n, dt)
//! ```
//!
//! where the derivative is always read from the model evaluated at `state_n`.
//! How the derivative is applied belongs to the state's [`StepIntegrable`]
//! implementation, so wrapping or clamping happens there.
//!
//! # Example
//!
//! ```ignore
//! use helm_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in solution.stepped() {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use helm_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Integrates an ODE problem with forward Euler, reporting every step.
///
/// The initial input is evaluated first and reported as step 0. Each of the
/// following `steps` updates is then reported in order, and the observer may
/// answer any event with [`Action::StopEarly`]. The returned history always
/// ends with the snapshot of the last reported event.
///
/// # Errors
///
/// Returns an error as soon as the model or the problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let output = model.call(&initial).map_err(Error::model)?;
    let mut current = Snapshot::new(initial, output);
    let mut history = Vec::with_capacity(steps + 1);

    for step in 0..=steps {
        if step > 0 {
            current = advance(model, problem, &current, &dt)?;
        }
        history.push(current.clone());

        let event = Event {
            step,
            snapshot: current.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Takes one Euler step from `current` and evaluates the model there.
///
/// The derivative comes from `current` alone; the stepped state is handed
/// back to the problem to rebuild a full input.
fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: &P::Delta,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let state = problem.state(&current.input).map_err(Error::problem)?;
    let derivative = problem
        .derivative(&current.input, &current.output)
        .map_err(Error::problem)?;
    let stepped = state.step(derivative, dt.clone());

    let input = problem
        .build_input(&current.input, &stepped, dt)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    Ok(Snapshot::new(input, output))
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{convert::Infallible, fmt};

    use approx::assert_relative_eq;
    use helm_core::DerivativeOf;

    // --- Test fixtures ---

    /// Stored charge; never negative.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Charge(f64);

    /// Rate of change of charge.
    #[derive(Debug, Clone, Copy)]
    struct Current(f64);

    impl StepIntegrable<f64> for Charge {
        type Derivative = Current;

        fn step(&self, derivative: Current, dt: f64) -> Self {
            Charge((self.0 + derivative.0 * dt).max(0.0))
        }
    }

    #[derive(Debug, Clone)]
    struct Input {
        charge: Charge,
        time: f64,
    }

    #[derive(Debug, Clone)]
    struct Output {
        current: Current,
    }

    /// A constant drain.
    struct Drain {
        rate: f64,
    }

    impl Model for Drain {
        type Input = Input;
        type Output = Output;
        type Error = Infallible;

        fn call(&self, _input: &Input) -> Result<Output, Infallible> {
            Ok(Output {
                current: Current(-self.rate),
            })
        }
    }

    /// A model that refuses to evaluate once the charge is empty.
    struct StrictDrain;

    #[derive(Debug)]
    struct Empty;

    impl fmt::Display for Empty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("charge is empty")
        }
    }

    impl std::error::Error for Empty {}

    impl Model for StrictDrain {
        type Input = Input;
        type Output = Output;
        type Error = Empty;

        fn call(&self, input: &Input) -> Result<Output, Empty> {
            if input.charge.0 <= 0.0 {
                return Err(Empty);
            }
            Ok(Output {
                current: Current(-1.0),
            })
        }
    }

    struct ChargeProblem;

    impl OdeProblem for ChargeProblem {
        type Input = Input;
        type Output = Output;
        type Delta = f64;
        type State = Charge;
        type Error = Infallible;

        fn state(&self, input: &Input) -> Result<Charge, Infallible> {
            Ok(input.charge)
        }

        fn derivative(
            &self,
            _input: &Input,
            output: &Output,
        ) -> Result<DerivativeOf<Charge, f64>, Infallible> {
            Ok(output.current)
        }

        fn build_input(&self, base: &Input, state: &Charge, dt: &f64) -> Result<Input, Infallible> {
            Ok(Input {
                charge: *state,
                time: base.time + dt,
            })
        }
    }

    fn full() -> Input {
        Input {
            charge: Charge(1.0),
            time: 0.0,
        }
    }

    // --- Tests ---

    #[test]
    fn constant_drain() {
        let solution =
            solve_unobserved(&Drain { rate: 0.5 }, &ChargeProblem, full(), 0.1, 10).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.history.len(), 11);
        assert_eq!(solution.stepped().len(), 10);

        let last = solution.history.last().unwrap();
        assert_relative_eq!(last.input.charge.0, 0.5, epsilon = 1e-12);
        assert_relative_eq!(last.input.time, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn state_owns_the_clamp() {
        let solution =
            solve_unobserved(&Drain { rate: 3.0 }, &ChargeProblem, full(), 0.5, 4).unwrap();

        for snapshot in solution.stepped() {
            assert_eq!(snapshot.input.charge, Charge(0.0));
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let observer =
            |event: &Event<Input, Output>| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(
            &Drain { rate: 0.1 },
            &ChargeProblem,
            full(),
            0.1,
            100,
            observer,
        )
        .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6);
    }

    #[test]
    fn zero_steps_returns_only_initial() {
        let solution =
            solve_unobserved(&Drain { rate: 1.0 }, &ChargeProblem, full(), 0.1, 0).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert!(solution.stepped().is_empty());
        assert!(solution.into_stepped().is_empty());
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let mut steps = Vec::new();
        solve(
            &Drain { rate: 0.1 },
            &ChargeProblem,
            full(),
            0.25,
            4,
            |event: &Event<Input, Output>| {
                steps.push(event.step);
                None
            },
        )
        .unwrap();

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn model_errors_are_boxed() {
        let error = solve_unobserved(&StrictDrain, &ChargeProblem, full(), 0.5, 10).unwrap_err();

        assert!(matches!(error, Error::Model(_)));
        assert_eq!(error.to_string(), "model evaluation failed: charge is empty");
    }
}
