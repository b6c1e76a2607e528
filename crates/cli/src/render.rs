//! Text and JSON rendering of a solution.

use std::io::Write;

use anyhow::Result;
use euler_solvers::euler::{Input, Solution, Status, Summary};
use serde::Serialize;

/// Everything the JSON output contains.
#[derive(Serialize)]
struct Report<'a> {
    summary: Summary,
    solution: &'a Solution,
}

/// Writes the step table, the error table, and the summary.
pub fn table<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    let Input {
        k,
        x0,
        y0,
        x_target,
        h,
    } = solution.input;

    writeln!(out, "Euler's method for dy/dx = {k}y")?;
    writeln!(out, "Initial ({x0}, {y0}), target x = {x_target}, step size h = {h}")?;
    writeln!(out)?;

    if solution.steps.is_empty() {
        writeln!(out, "No steps taken: the target is the initial x value.")?;
    } else {
        write_steps(out, solution)?;
        writeln!(out)?;
        write_errors(out, solution)?;
    }

    writeln!(out)?;
    write_summary(out, &solution.summary())?;

    if solution.status == Status::StoppedByObserver {
        writeln!(
            out,
            "Stopped early after {} steps: error limit exceeded.",
            solution.steps.len()
        )?;
    }

    Ok(())
}

/// Writes the solution and its summary as pretty-printed JSON.
pub fn json<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    let report = Report {
        summary: solution.summary(),
        solution,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_steps<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    writeln!(out, "Step-by-step calculations")?;
    writeln!(
        out,
        "{:>6}  {:>10}  {:>14}  {:>14}  {:>14}  {:>14}",
        "Step", "x", "y", "dy/dx", "Δy", "y next"
    )?;
    for step in &solution.steps {
        writeln!(
            out,
            "{:>6}  {:>10.4}  {:>14.6}  {:>14.6}  {:>14.6}  {:>14.6}",
            step.index, step.x, step.y, step.slope, step.delta_y, step.y_next
        )?;
    }
    Ok(())
}

fn write_errors<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    writeln!(out, "Error analysis")?;
    writeln!(
        out,
        "{:>10}  {:>14}  {:>14}  {:>14}  {:>18}",
        "x", "Euler", "Analytical", "Absolute error", "Relative error (%)"
    )?;
    let initial = solution.initial_record();
    for record in std::iter::once(&initial).chain(&solution.errors) {
        writeln!(
            out,
            "{:>10.4}  {:>14.6}  {:>14.6}  {:>14.6}  {:>18}",
            record.x,
            record.numerical_y,
            record.analytical_y,
            record.absolute_error,
            percent(record.relative_error_percent()),
        )?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    writeln!(out, "Summary")?;
    writeln!(out, "  Number of steps:          {}", summary.steps)?;
    writeln!(out, "  Final x value:            {:.4}", summary.final_x)?;
    writeln!(out, "  Final y value (Euler):    {:.6}", summary.final_y)?;
    writeln!(out, "  Final y value (exact):    {:.6}", summary.final_analytical_y)?;
    writeln!(out, "  Maximum absolute error:   {:.6}", summary.max_absolute_error)?;
    writeln!(
        out,
        "  Maximum relative error:   {}",
        percent(summary.max_relative_error_percent())
    )?;
    Ok(())
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_owned(), |p| format!("{p:.4}%"))
}
