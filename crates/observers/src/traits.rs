//! Capability traits for generic observers.
//!
//! These traits abstract over solver event and action types, so an observer
//! can be written once against the capability it needs.
//!
//! # Event traits
//!
//! - [`HasAbsoluteError`] — events that carry an absolute error
//! - [`HasRelativeError`] — events that may carry a relative error
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use euler_core::Observer;
//! use euler_observers::traits::{CanStopEarly, HasAbsoluteError};
//!
//! struct StopAfterDrift {
//!     drift: f64,
//! }
//!
//! impl<E: HasAbsoluteError, A: CanStopEarly> Observer<E, A> for StopAfterDrift {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.absolute_error() > self.drift).then(A::stop_early)
//!     }
//! }
//! ```

use euler_solvers::euler;

/// An event that carries an absolute error.
pub trait HasAbsoluteError {
    /// Returns the absolute error for this event.
    fn absolute_error(&self) -> f64;
}

/// An event that may carry a relative error.
pub trait HasRelativeError {
    /// Returns the relative error, or `None` where it is undefined.
    fn relative_error(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasAbsoluteError for euler::Event {
    fn absolute_error(&self) -> f64 {
        self.record.absolute_error
    }
}

impl HasRelativeError for euler::Event {
    fn relative_error(&self) -> Option<f64> {
        self.record.relative_error
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
