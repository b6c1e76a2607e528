/// The initial condition `(x₀, y₀)` of an initial value problem.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialValue {
    /// Independent variable at the start of integration.
    pub x: f64,

    /// Dependent variable at the start of integration.
    pub y: f64,
}

impl InitialValue {
    /// Creates an initial condition at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The first-order linear equation `dy/dx = k·y`.
///
/// Positive `k` gives exponential growth, negative `k` exponential decay, and
/// `k = 0` a constant. The closed-form solution through `(x₀, y₀)` is
///
/// ```text
/// y(x) = y₀ · e^(k·(x − x₀))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthEquation {
    /// The rate constant.
    pub k: f64,
}

impl GrowthEquation {
    /// Creates the equation `dy/dx = k·y`.
    #[must_use]
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Returns `dy/dx` at a point with dependent value `y`.
    ///
    /// The slope does not depend on `x`.
    #[must_use]
    pub fn slope(&self, y: f64) -> f64 {
        self.k * y
    }

    /// Returns the exact solution through `initial`, evaluated at `x`.
    #[must_use]
    pub fn analytical(&self, initial: InitialValue, x: f64) -> f64 {
        initial.y * (self.k * (x - initial.x)).exp()
    }

    /// Samples the exact solution at `points` evenly spaced values of `x`,
    /// from `initial.x` to `x_end` inclusive.
    ///
    /// Returns `[x, y]` pairs ready for plotting. A single point samples only
    /// `initial.x`; zero points returns an empty vector.
    #[must_use]
    pub fn sample(&self, initial: InitialValue, x_end: f64, points: usize) -> Vec<[f64; 2]> {
        match points {
            0 => Vec::new(),
            1 => vec![[initial.x, initial.y]],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let spacing = (x_end - initial.x) / (points - 1) as f64;

                (0..points)
                    .map(|i| {
                        // Pin the last sample to `x_end` so rounding never shortens the curve.
                        #[allow(clippy::cast_precision_loss)]
                        let x = if i == points - 1 {
                            x_end
                        } else {
                            initial.x + spacing * i as f64
                        };
                        [x, self.analytical(initial, x)]
                    })
                    .collect()
            }
        }
    }
}
