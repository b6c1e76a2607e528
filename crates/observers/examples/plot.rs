//! Interactive comparison of step sizes for forward Euler.
//!
//! Integrates `dy/dx = k·y` from `(0, 1)` to `x = 4` with three step sizes and
//! overlays each trajectory on the exact solution.
//!
//! # Usage
//!
//! ```text
//! cargo run -p euler-observers --example plot --features plot
//! cargo run -p euler-observers --example plot --features plot -- -0.8
//! ```
//!
//! The optional argument is `k` (default `0.5`). Positive values show Euler
//! falling behind exponential growth; negative values show it undershooting
//! exponential decay. Halving the step size roughly halves the gap.

use std::error::Error;

use euler_observers::{PlotObserver, ShowConfig};
use euler_solvers::euler::{self, Config, Input};

const STEP_SIZES: [f64; 3] = [1.0, 0.5, 0.1];

fn main() -> Result<(), Box<dyn Error>> {
    let k = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .map_err(|err| format!("invalid k, expected a number such as 0.5: {err}"))?
        .unwrap_or(0.5);

    let mut obs = PlotObserver::<4>::new(["Analytical", "h = 1.0", "h = 0.5", "h = 0.1"]);

    let reference = Input::new(k, 0.0, 1.0, 4.0, STEP_SIZES[0]);
    for [x, y] in reference
        .equation()
        .sample(reference.initial(), reference.x_target, 400)
    {
        obs.record(x, [Some(y), None, None, None]);
    }

    for (slot, h) in STEP_SIZES.into_iter().enumerate() {
        let input = Input { h, ..reference };
        let solution = euler::solve_unobserved(input, &Config::default())?;
        let summary = solution.summary();
        println!(
            "h = {h:<4}  final y = {:>10.6}  exact = {:>10.6}  max |error| = {:.6}",
            summary.final_y, summary.final_analytical_y, summary.max_absolute_error
        );

        for [x, y] in solution.trajectory() {
            let mut traces = [None; 4];
            traces[slot + 1] = Some(y);
            obs.record(x, traces);
        }
    }

    obs.show(
        ShowConfig::new()
            .title(format!("Euler's method vs analytical solution, dy/dx = {k}y"))
            .legend(),
    )?;

    Ok(())
}
