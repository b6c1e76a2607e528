use thiserror::Error;

/// Errors that abort an Euler solve.
///
/// A zero exact solution is not an error; it only marks the affected record's
/// relative error as undefined (see [`ErrorRecord`](super::ErrorRecord)).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{name} must be finite, got {value}")]
    NonFiniteInput { name: &'static str, value: f64 },

    #[error("step size must be non-zero")]
    ZeroStepSize,

    #[error("step size {h} moves away from the target (x_target - x0 = {span})")]
    InvalidStepDirection { h: f64, span: f64 },

    /// `|h|` is too close to the float spacing of `x` near `magnitude` for
    /// consecutive steps to have distinct `x` values.
    #[error("step size {h} is too small to advance x near {magnitude}")]
    StepTooSmall { h: f64, magnitude: f64 },

    #[error("projected {projected:.0} steps exceeds the limit of {max}")]
    TooManySteps { projected: f64, max: usize },
}
