use thiserror::Error;

/// Default limit on the number of steps in a single solve.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Default termination tolerance, as a fraction of one step.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Largest accepted termination tolerance, as a fraction of one step.
///
/// The tolerance only absorbs rounding in `(x_target − x0)/h`; anything
/// coarser would let a solve stop visibly short of `x_target`.
pub const MAX_TOLERANCE: f64 = 1e-6;

/// Configuration for the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_steps: usize,
    tolerance: f64,
}

/// Errors that can occur when validating an Euler solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_steps must be at least 1")]
    MaxSteps,

    #[error("tolerance must be finite and in [0, 1e-6]")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step limit and tolerance.
    ///
    /// The tolerance is measured in steps: a remaining distance to the target
    /// of at most `tolerance · |h|` counts as having arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero, or if `tolerance` is negative,
    /// non-finite, or greater than [`MAX_TOLERANCE`].
    pub fn new(max_steps: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }
        if !(0.0..=MAX_TOLERANCE).contains(&tolerance) {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_steps,
            tolerance,
        })
    }

    /// Returns the maximum number of steps a solve may take.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the termination tolerance, as a fraction of one step.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
