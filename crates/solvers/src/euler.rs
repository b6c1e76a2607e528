//! Forward Euler solver for `dy/dx = k·y`.
//!
//! Each step advances the state using the slope at the start of the step:
//!
//! ```text
//! slope_n  = k · y_n
//! y_{n+1}  = y_n + slope_n · h
//! x_{n+1}  = x_0 + (n + 1) · h
//! ```
//!
//! and the state it produces is compared against the exact solution
//! `y₀·e^(k·(x − x₀))`, giving an absolute and a relative error per step.
//!
//! # Step count
//!
//! Steps continue until `x` reaches or passes `x_target`. The count is
//! projected up front as `ceil((x_target − x₀)/h − tolerance)`, where
//! `tolerance` (see [`Config`]) is a fraction of one step. This absorbs
//! floating-point drift so that, for example, ten steps of `0.1` from `0` to
//! `1` produce exactly ten steps. When `x_target == x₀` (within tolerance) the
//! solve produces no steps.
//!
//! Projections above [`Config::max_steps`] fail with
//! [`Error::TooManySteps`] before any step is computed.
//!
//! # Errors per step
//!
//! `errors[i]` describes the state produced by `steps[i]`, at
//! `(steps[i].x_next, steps[i].y_next)`. The initial condition is exact by
//! construction and is available as [`Solution::initial`]. Where the exact
//! solution is zero the relative error is undefined and recorded as `None`.
//!
//! # Observer
//!
//! The observer receives an [`Event`] after each step and may return
//! [`Action::StopEarly`] to end the solve with the steps taken so far.
//!
//! # Example
//!
//! ```
//! use euler_solvers::euler::{self, Config, Input};
//!
//! let input = Input::new(0.1, 0.0, 1.0, 1.0, 0.5);
//! let solution = euler::solve_unobserved(input, &Config::default())?;
//!
//! assert_eq!(solution.steps.len(), 2);
//! assert!((solution.steps[1].y_next - 1.1025).abs() < 1e-12);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod input;
mod record;
mod solution;
mod step;
mod steps;
mod summary;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_STEPS, DEFAULT_TOLERANCE, MAX_TOLERANCE};
pub use error::Error;
pub use event::Event;
pub use input::Input;
pub use record::ErrorRecord;
pub use solution::{Solution, Status};
pub use step::Step;
pub use steps::Steps;
pub use summary::Summary;

use euler_core::Observer;
use tracing::{debug, trace};

/// Integrates `dy/dx = k·y` from `input` using forward Euler.
///
/// # Algorithm
///
/// 1. Validate the input and project the step count (see the module docs).
/// 2. For each step:
///    - Compute the slope `k·y` and the change `slope·h`.
///    - Compare the resulting state against the exact solution.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the steps and their error records.
///
/// # Errors
///
/// Returns an error if an input is not finite, `h` is zero or too small to
/// advance `x`, `h` points away from `x_target`, or the projected step count
/// exceeds [`Config::max_steps`].
pub fn solve<Obs>(input: Input, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let steps = input.steps(config)?;
    debug!(
        k = input.k,
        x0 = input.x0,
        y0 = input.y0,
        x_target = input.x_target,
        h = input.h,
        projected = steps.len(),
        "starting euler solve"
    );

    let equation = input.equation();
    let initial = input.initial();
    let mut solution = Solution::with_capacity(input, steps.len());

    for step in steps {
        let record = ErrorRecord::new(&equation, initial, step.x_next, step.y_next);
        trace!(
            index = step.index,
            x = step.x,
            y = step.y,
            y_next = step.y_next,
            absolute_error = record.absolute_error,
            "euler step"
        );

        solution.steps.push(step);
        solution.errors.push(record);

        if let Some(Action::StopEarly) = observer.observe(&Event { step, record }) {
            solution.status = Status::StoppedByObserver;
            break;
        }
    }

    debug!(
        status = ?solution.status,
        steps = solution.steps.len(),
        undefined_relative_errors = solution
            .errors
            .iter()
            .filter(|record| record.relative_error.is_none())
            .count(),
        "euler solve finished"
    );

    Ok(solution)
}

/// Integrates `dy/dx = k·y` using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved(input: Input, config: &Config) -> Result<Solution, Error> {
    solve(input, config, ())
}
