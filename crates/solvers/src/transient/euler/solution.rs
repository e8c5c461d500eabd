use helm_core::Snapshot;

/// How the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every requested step was taken.
    Complete,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshots in step order, starting with the initial snapshot.
    pub history: Vec<Snapshot<I, O>>,

    /// Number of integration steps taken.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the snapshots produced by integration steps, skipping the
    /// initial one.
    #[must_use]
    pub fn stepped(&self) -> &[Snapshot<I, O>] {
        self.history.get(1..).unwrap_or_default()
    }

    /// Consumes the solution and returns only the stepped snapshots.
    #[must_use]
    pub fn into_stepped(self) -> Vec<Snapshot<I, O>> {
        self.history.into_iter().skip(1).collect()
    }
}
