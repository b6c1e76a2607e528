//! Euler explorer CLI.
//!
//! Solves `dy/dx = k·y` with forward Euler, then prints each step, the error
//! of each step against the exact solution, and summary statistics. With the
//! `plot` feature it can also open a window overlaying both curves.

mod render;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use euler_observers::ErrorLimit;
use euler_solvers::euler::{self, Config, DEFAULT_MAX_STEPS, DEFAULT_TOLERANCE, Input};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "euler")]
#[command(
    about = "Solve dy/dx = ky with Euler's method and compare against the analytical solution",
    long_about = None
)]
struct Cli {
    /// Constant k in dy/dx = ky
    #[arg(short, long, default_value_t = 0.1, allow_negative_numbers = true)]
    k: f64,

    /// Initial x value (x0)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x0: f64,

    /// Initial y value (y0)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    y0: f64,

    /// Target x value to stop at
    #[arg(short = 't', long, default_value_t = 2.0, allow_negative_numbers = true)]
    x_target: f64,

    /// Step size h; negative to integrate toward a target below x0
    #[arg(
        short = 's',
        long = "step",
        default_value_t = 0.1,
        allow_negative_numbers = true
    )]
    h: f64,

    /// Refuse to solve if more steps than this would be needed
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Distance from the target, in steps, that counts as arrived
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Stop early once the absolute error exceeds this value
    #[arg(long)]
    stop_above: Option<f64>,

    /// Stop early once the relative error exceeds this percentage
    #[arg(long)]
    stop_above_percent: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Open a window comparing the Euler trajectory with the analytical curve
    #[arg(long)]
    plot: bool,

    /// Verbosity level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Step table, error table, and summary
    Table,
    /// The full solution and summary as JSON
    Json,
}

impl Cli {
    fn input(&self) -> Input {
        Input::new(self.k, self.x0, self.y0, self.x_target, self.h)
    }

    fn error_limit(&self) -> ErrorLimit {
        let mut limit = ErrorLimit::new();
        if let Some(max) = self.stop_above {
            limit = limit.with_absolute(max);
        }
        if let Some(percent) = self.stop_above_percent {
            limit = limit.with_relative(percent / 100.0);
        }
        limit
    }
}

fn parse_level(level: &str) -> Result<Level> {
    match level {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => bail!("invalid log level: {other}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level)?)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")?;

    let config =
        Config::new(cli.max_steps, cli.tolerance).context("invalid solver configuration")?;
    let input = cli.input();

    let solution = euler::solve(input, &config, cli.error_limit()).with_context(|| {
        format!(
            "cannot solve dy/dx = {}y from ({}, {}) to x = {} with step size {}",
            input.k, input.x0, input.y0, input.x_target, input.h
        )
    })?;
    info!(
        steps = solution.steps.len(),
        status = ?solution.status,
        "solved"
    );

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        Format::Table => render::table(&mut stdout, &solution)?,
        Format::Json => render::json(&mut stdout, &solution)?,
    }

    if cli.plot {
        show_plot(&solution)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn show_plot(solution: &euler::Solution) -> Result<()> {
    use euler_observers::{PlotObserver, ShowConfig};

    let Input { k, x0, y0, h, .. } = solution.input;
    let title = format!(
        "Euler's method vs analytical solution: dy/dx = {k}y, initial ({x0}, {y0}), h = {h}"
    );

    PlotObserver::comparison(solution, 1000)
        .show(ShowConfig::new().title(title).legend().markers())
        .map_err(|err| anyhow!("cannot open the plot window: {err}"))
}

#[cfg(not(feature = "plot"))]
fn show_plot(_solution: &euler::Solution) -> Result<()> {
    Err(anyhow!(
        "plotting is unavailable; rebuild with `--features plot`"
    ))
}
