use super::Solution;

/// Summary statistics of an Euler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of steps taken.
    pub steps: usize,

    /// `x` at the final state.
    pub final_x: f64,

    /// The Euler approximation at the final state.
    pub final_y: f64,

    /// The exact solution at the final state.
    pub final_analytical_y: f64,

    /// Largest absolute error over all steps; zero with no steps.
    pub max_absolute_error: f64,

    /// Largest defined relative error over all steps.
    ///
    /// `None` when no step has a defined relative error, including when no
    /// steps were taken.
    pub max_relative_error: Option<f64>,
}

impl Summary {
    pub(super) fn of(solution: &Solution) -> Self {
        let final_state = solution.final_state();
        let final_analytical_y = solution
            .errors
            .last()
            .map_or(final_state.y, |record| record.analytical_y);

        let max_absolute_error = solution
            .errors
            .iter()
            .map(|record| record.absolute_error)
            .fold(0.0, f64::max);

        let max_relative_error = solution
            .errors
            .iter()
            .filter_map(|record| record.relative_error)
            .reduce(f64::max);

        Self {
            steps: solution.steps.len(),
            final_x: final_state.x,
            final_y: final_state.y,
            final_analytical_y,
            max_absolute_error,
            max_relative_error,
        }
    }

    /// Returns the largest relative error as a percentage.
    #[must_use]
    pub fn max_relative_error_percent(&self) -> Option<f64> {
        self.max_relative_error.map(|e| e * 100.0)
    }
}
