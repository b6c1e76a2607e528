use euler_core::Observer;

use crate::traits::{CanStopEarly, HasAbsoluteError, HasRelativeError};

/// An observer that stops a solve once the error exceeds a limit.
///
/// Either limit may be left unset. The relative limit only triggers on events
/// whose relative error is defined.
///
/// # Example
///
/// ```
/// use euler_observers::ErrorLimit;
/// use euler_solvers::euler::{self, Config, Input, Status};
///
/// let input = Input::new(1.0, 0.0, 1.0, 5.0, 0.5);
/// let limit = ErrorLimit::absolute(1.0);
///
/// let solution = euler::solve(input, &Config::default(), limit)?;
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.summary().max_absolute_error > 1.0);
/// # Ok::<(), euler::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorLimit {
    absolute: Option<f64>,
    relative: Option<f64>,
}

impl ErrorLimit {
    /// Creates a limit with no thresholds; it never stops a solve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a limit on the absolute error.
    #[must_use]
    pub fn absolute(max: f64) -> Self {
        Self::new().with_absolute(max)
    }

    /// Creates a limit on the relative error, as a fraction.
    #[must_use]
    pub fn relative(max: f64) -> Self {
        Self::new().with_relative(max)
    }

    /// Sets the absolute error threshold.
    #[must_use]
    pub fn with_absolute(mut self, max: f64) -> Self {
        self.absolute = Some(max);
        self
    }

    /// Sets the relative error threshold, as a fraction.
    #[must_use]
    pub fn with_relative(mut self, max: f64) -> Self {
        self.relative = Some(max);
        self
    }

    /// Returns `true` if the event's error exceeds either threshold.
    pub fn is_exceeded_by<E>(&self, event: &E) -> bool
    where
        E: HasAbsoluteError + HasRelativeError,
    {
        let absolute = self
            .absolute
            .is_some_and(|max| event.absolute_error() > max);
        let relative = self
            .relative
            .zip(event.relative_error())
            .is_some_and(|(max, error)| error > max);

        absolute || relative
    }
}

impl<E, A> Observer<E, A> for ErrorLimit
where
    E: HasAbsoluteError + HasRelativeError,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.is_exceeded_by(event).then(A::stop_early)
    }
}
