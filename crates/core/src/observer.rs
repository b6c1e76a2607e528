/// Receives events from a solver and optionally returns a control action.
///
/// Solvers call [`observe`][Observer::observe] once per event. Returning
/// `None` lets the solver continue; returning `Some(action)` asks the solver to
/// act on it (for example, to stop early). Which actions exist, and what they
/// mean, is up to each solver.
///
/// Implementations are provided for:
///
/// - `()`, which ignores every event
/// - any `FnMut(&E) -> Option<A>` closure
///
/// # Example
///
/// ```
/// use euler_core::Observer;
///
/// let mut seen = Vec::new();
/// let mut observer = |event: &f64| {
///     seen.push(*event);
///     (*event > 1.0).then_some("stop")
/// };
///
/// assert_eq!(observer.observe(&0.5), None);
/// assert_eq!(observer.observe(&1.5), Some("stop"));
/// assert_eq!(seen, vec![0.5, 1.5]);
/// ```
pub trait Observer<E, A> {
    /// Handles an event, returning an action for the solver if any.
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
