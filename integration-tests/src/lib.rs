//! Shared checks for the cross-crate integration tests.

use approx::assert_relative_eq;
use euler_solvers::euler::{Input, Solution};

/// Asserts the guarantees every successful solve must satisfy.
///
/// - `steps` and `errors` have equal length
/// - each step is indexed in order and advances `x` by `h`
/// - `y_next == y + slope·h` exactly
/// - each record compares the step's result against `y0·e^(k·(x − x0))`
pub fn assert_well_formed(solution: &Solution) {
    let Input { k, x0, y0, h, .. } = solution.input;

    assert_eq!(solution.steps.len(), solution.errors.len());

    let mut x = x0;
    let mut y = y0;
    for (i, (step, record)) in solution.steps.iter().zip(&solution.errors).enumerate() {
        assert_eq!(step.index, i);
        assert_relative_eq!(step.x, x, epsilon = 1e-9);
        assert_eq!(step.y, y);
        assert_eq!(step.y_next, step.y + step.slope * h);

        assert_eq!(record.numerical_y, step.y_next);
        assert_relative_eq!(
            record.analytical_y,
            y0 * (k * (record.x - x0)).exp(),
            max_relative = 1e-12
        );

        x += h;
        y = step.y_next;
    }
}

/// Asserts that `x` moves strictly toward the target in every step.
pub fn assert_monotonic(solution: &Solution) {
    let direction = solution.input.h.signum();
    for step in &solution.steps {
        assert!((step.x_next - step.x) * direction > 0.0);
    }
}
