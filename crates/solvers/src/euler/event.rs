use super::{ErrorRecord, Step};

/// Event emitted by the Euler solver after each step.
///
/// The record describes the state the step produced, at
/// `(step.x_next, step.y_next)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step just taken.
    pub step: Step,

    /// Comparison of the step's result against the exact solution.
    pub record: ErrorRecord,
}
