//! Plotting observer for comparing Euler against the exact solution.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use euler_core::Observer;
use euler_solvers::euler;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Euler vs exact").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    markers: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no markers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            markers: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Draws a marker at every recorded point of the first trace.
    ///
    /// Useful for showing where Euler actually evaluated, on top of a smooth
    /// reference curve.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// [`euler::Event`] implements `Plottable<2>` with the traces
/// `[numerical y, analytical y]` at the end of each step.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<2> for euler::Event {
    fn x(&self) -> Option<f64> {
        Some(self.record.x)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.record.numerical_y), Some(self.record.analytical_y)]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, then either pass
/// `&mut PlotObserver` to a solver whose events implement [`Plottable<N>`],
/// or call [`record`][PlotObserver::record] directly.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Euler's method", "Analytical solution"]);
/// euler::solve(input, &Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("dy/dx = ky").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points recorded for a trace.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    #[must_use]
    pub fn points(&self, trace: usize) -> &[[f64; 2]] {
        &self.data[trace]
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    markers: config.markers,
                }))
            }),
        )
    }
}

impl PlotObserver<2> {
    /// Builds the standard comparison plot for a finished solve.
    ///
    /// Trace 0 is the Euler trajectory, starting at the initial condition.
    /// Trace 1 is the exact solution sampled at `samples` evenly spaced points
    /// from `x0` to `x_target`, so it draws as a smooth curve. When the last
    /// step overshoots, the Euler trace ends past the curve.
    #[must_use]
    pub fn comparison(solution: &euler::Solution, samples: usize) -> Self {
        let mut obs = Self::new(["Euler's method", "Analytical solution"]);

        for [x, y] in solution.trajectory() {
            obs.record(x, [Some(y), None]);
        }

        let input = solution.input;
        for [x, y] in input.equation().sample(input.initial(), input.x_target, samples) {
            obs.record(x, [None, Some(y)]);
        }

        obs
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    markers: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("euler_plot").x_axis_label("x").y_axis_label("y");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            let markers = self.markers;
            plot.show(ui, |plot_ui| {
                for (i, (name, points)) in self.traces.iter().enumerate() {
                    let line: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(line).name(name));

                    if markers && i == 0 {
                        let dots: PlotPoints = points.iter().copied().collect();
                        plot_ui.points(Points::new(dots).radius(3.0).name(name));
                    }
                }
            });
        });
    }
}
