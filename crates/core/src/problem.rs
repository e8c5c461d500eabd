use crate::{DerivativeOf, StepIntegrable};

/// Connects a [`Model`](crate::Model) to a fixed-step integrator.
///
/// The model sees full inputs and produces outputs; the integrator only knows
/// how to step a [`StepIntegrable`] state. A problem translates between the
/// two: it pulls the state out of an input, reads the state's rate of change
/// from an evaluated output, and puts a stepped state back into an input.
///
/// When the model input *is* the state, `state` and `build_input` are copies.
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// The evolving part of `input`.
    ///
    /// # Errors
    ///
    /// Fails if `input` does not hold a usable state.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Rate of change of the state at `input`, given the model's `output`
    /// there.
    ///
    /// # Errors
    ///
    /// Fails if the rate cannot be read from the evaluation.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// The input for the next evaluation.
    ///
    /// `base` is the input the step started from, `state` is the stepped
    /// state, and `delta` is the step size, for problems that also track time.
    ///
    /// # Errors
    ///
    /// Fails if `state` cannot be placed into an input.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
