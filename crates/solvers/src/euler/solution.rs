use euler_core::InitialValue;

use super::{ErrorRecord, Input, Step, Summary};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Reached `x_target`.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler solve.
///
/// `steps` and `errors` always have the same length; `errors[i]` describes
/// the state produced by `steps[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The input that was solved.
    pub input: Input,

    /// The steps taken, in order.
    pub steps: Vec<Step>,

    /// The error record for each step's result, in order.
    pub errors: Vec<ErrorRecord>,
}

impl Solution {
    pub(super) fn with_capacity(input: Input, capacity: usize) -> Self {
        Self {
            status: Status::Complete,
            input,
            steps: Vec::with_capacity(capacity),
            errors: Vec::with_capacity(capacity),
        }
    }

    /// Returns the initial condition, which is exact by construction.
    #[must_use]
    pub fn initial(&self) -> InitialValue {
        self.input.initial()
    }

    /// Returns the error record of the initial condition.
    ///
    /// Its absolute error is zero; its relative error is zero, or undefined
    /// when `y0` is zero. Tables list it ahead of [`errors`](Self::errors).
    #[must_use]
    pub fn initial_record(&self) -> ErrorRecord {
        let initial = self.initial();
        ErrorRecord::new(&self.input.equation(), initial, initial.x, initial.y)
    }

    /// Returns the final numerical state `(x, y)`.
    ///
    /// With no steps this is the initial condition.
    #[must_use]
    pub fn final_state(&self) -> InitialValue {
        self.steps
            .last()
            .map_or_else(|| self.initial(), |step| InitialValue::new(step.x_next, step.y_next))
    }

    /// Returns the Euler trajectory as `[x, y]` pairs, starting at the
    /// initial condition.
    #[must_use]
    pub fn trajectory(&self) -> Vec<[f64; 2]> {
        let initial = self.initial();
        std::iter::once([initial.x, initial.y])
            .chain(self.steps.iter().map(|step| [step.x_next, step.y_next]))
            .collect()
    }

    /// Computes summary statistics over the solve.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(self)
    }
}
