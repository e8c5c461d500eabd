/// A type that can be advanced by its own derivative.
///
/// `step` returns the value after applying `derivative` over `delta`. The
/// plain rule is `self + derivative * delta`, but implementors own the
/// arithmetic, so a state can keep itself well-formed while stepping: an angle
/// can wrap, a quantity that must stay non-negative can clamp.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
