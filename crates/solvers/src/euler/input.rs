use euler_core::{GrowthEquation, InitialValue};

use super::{Config, Error, Steps};

/// How many multiples of `|x|·ε` a step must exceed.
///
/// Rounding in `x0 + i·h` moves each `x` by at most about `1.5·|x|·ε`, so a
/// step above this keeps consecutive values strictly ordered.
const MIN_STEP_SPACINGS: f64 = 4.0;

/// The parameters of one Euler run.
///
/// Describes the problem `dy/dx = k·y`, `y(x0) = y0`, integrated toward
/// `x_target` in steps of `h`. The sign of `h` must match the sign of
/// `x_target − x0`; the solver never flips it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Input {
    /// The rate constant.
    pub k: f64,

    /// Initial value of the independent variable.
    pub x0: f64,

    /// Initial value of the dependent variable.
    pub y0: f64,

    /// The value of `x` at which integration stops.
    pub x_target: f64,

    /// The step size.
    pub h: f64,
}

impl Input {
    /// Creates an input from its five parameters.
    #[must_use]
    pub fn new(k: f64, x0: f64, y0: f64, x_target: f64, h: f64) -> Self {
        Self {
            k,
            x0,
            y0,
            x_target,
            h,
        }
    }

    /// Returns the equation being integrated.
    #[must_use]
    pub fn equation(&self) -> GrowthEquation {
        GrowthEquation::new(self.k)
    }

    /// Returns the initial condition `(x0, y0)`.
    #[must_use]
    pub fn initial(&self) -> InitialValue {
        InitialValue::new(self.x0, self.y0)
    }

    /// Returns a lazy sequence of the steps this input produces.
    ///
    /// The sequence is validated and its length projected up front, exactly
    /// as [`solve`](super::solve) does.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`projected_steps`](Self::projected_steps).
    pub fn steps(&self, config: &Config) -> Result<Steps, Error> {
        let count = self.projected_steps(config)?;
        Ok(Steps::new(*self, count))
    }

    /// Returns how many steps it takes to reach `x_target`.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is not finite, `h` is zero or too small to
    /// advance `x` at its magnitude, `h` points away from `x_target`, or the
    /// count exceeds [`Config::max_steps`].
    pub fn projected_steps(&self, config: &Config) -> Result<usize, Error> {
        self.validate()?;

        let span = self.x_target - self.x0;
        let remaining = span / self.h;
        let tolerance = config.tolerance();

        if remaining.abs() <= tolerance {
            return Ok(0);
        }
        if remaining < 0.0 {
            return Err(Error::InvalidStepDirection { h: self.h, span });
        }

        let projected = (remaining - tolerance).ceil();
        let max = config.max_steps();

        #[allow(clippy::cast_precision_loss)]
        let limit = max as f64;
        if projected > limit {
            return Err(Error::TooManySteps { projected, max });
        }

        // Bounded above by `max_steps` and below by one.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = projected as usize;
        Ok(count)
    }

    /// Returns `x` at the start of step `index`.
    ///
    /// Computed from the index rather than accumulated, so rounding does not
    /// build up across steps.
    pub(super) fn x_at(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = index as f64;
        self.x0 + n * self.h
    }

    fn validate(&self) -> Result<(), Error> {
        let named = [
            ("k", self.k),
            ("x0", self.x0),
            ("y0", self.y0),
            ("x_target", self.x_target),
            ("h", self.h),
        ];
        if let Some((name, value)) = named.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::NonFiniteInput { name, value });
        }
        if self.h == 0.0 {
            return Err(Error::ZeroStepSize);
        }

        let magnitude = self.x0.abs().max(self.x_target.abs());
        if self.h.abs() <= MIN_STEP_SPACINGS * magnitude * f64::EPSILON {
            return Err(Error::StepTooSmall {
                h: self.h,
                magnitude,
            });
        }
        Ok(())
    }
}
