use euler_core::{GrowthEquation, InitialValue};

/// Comparison of a numerical state against the exact solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorRecord {
    /// Independent variable of the compared state.
    pub x: f64,

    /// The Euler approximation of `y(x)`.
    pub numerical_y: f64,

    /// The exact `y(x) = y₀·e^(k·(x − x₀))`.
    pub analytical_y: f64,

    /// `|numerical_y − analytical_y|`.
    pub absolute_error: f64,

    /// `absolute_error / |analytical_y|`, or `None` where `analytical_y` is zero.
    pub relative_error: Option<f64>,
}

impl ErrorRecord {
    /// Compares `numerical_y` at `x` against the exact solution through `initial`.
    #[must_use]
    pub fn new(
        equation: &GrowthEquation,
        initial: InitialValue,
        x: f64,
        numerical_y: f64,
    ) -> Self {
        let analytical_y = equation.analytical(initial, x);
        let absolute_error = (numerical_y - analytical_y).abs();
        let relative_error = (analytical_y != 0.0).then(|| absolute_error / analytical_y.abs());

        Self {
            x,
            numerical_y,
            analytical_y,
            absolute_error,
            relative_error,
        }
    }

    /// Returns the relative error as a percentage, or `None` where undefined.
    #[must_use]
    pub fn relative_error_percent(&self) -> Option<f64> {
        self.relative_error.map(|e| e * 100.0)
    }
}
