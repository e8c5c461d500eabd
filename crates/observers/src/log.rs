use helm_core::Observer;
use tracing::info;

use crate::traits::HasStep;

/// Reports progress through `tracing` every `every` steps.
///
/// Never returns an action, so it can be handed to solvers that only accept
/// passive observers.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    every: usize,
    logged: usize,
}

impl LogObserver {
    /// Creates an observer that logs at steps that are multiples of `every`.
    ///
    /// An interval of zero is treated as one.
    pub fn new(label: impl Into<String>, every: usize) -> Self {
        Self {
            label: label.into(),
            every: every.max(1),
            logged: 0,
        }
    }

    /// Number of progress lines emitted so far.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl<E: HasStep, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if step % self.every == 0 {
            info!(label = %self.label, step, "progress");
            self.logged += 1;
        }
        None
    }
}

impl<E: HasStep, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        <LogObserver as Observer<E, A>>::observe(self, event)
    }
}
