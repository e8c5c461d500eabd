/// Control actions an observer may return to the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the history recorded so far.
    StopEarly,
}
