/// Receives events from a solver and optionally answers with an action.
///
/// Each solver defines its own event and action types. Returning `None` lets
/// the solver continue undisturbed.
///
/// Observers are implemented for:
///
/// - `()`, which ignores every event
/// - any `FnMut(&E) -> Option<A>` closure
///
/// A solver whose action type is uninhabited (such as
/// [`std::convert::Infallible`]) accepts observers that can watch but never
/// intervene.
pub trait Observer<E, A> {
    /// Observes a single event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
