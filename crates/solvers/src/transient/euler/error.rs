use std::error::Error as StdError;

type Source = Box<dyn StdError + Send + Sync>;

/// Why an Euler integration stopped before finishing.
///
/// The underlying error is boxed, so the solver stays generic over the
/// model's and problem's own error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// [`Model::call`](helm_core::Model::call) failed.
    #[error("model evaluation failed: {0}")]
    Model(#[source] Source),

    /// One of the [`OdeProblem`](helm_core::OdeProblem) hooks failed.
    #[error("problem hook failed: {0}")]
    Problem(#[source] Source),
}

impl Error {
    pub(crate) fn model(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Model(Box::new(err))
    }

    pub(crate) fn problem(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Problem(Box::new(err))
    }
}
