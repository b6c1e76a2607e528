/// One forward Euler step.
///
/// `x` and `y` are the state at the start of the step; `x_next` and `y_next`
/// are the state it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Zero-based position in the sequence.
    pub index: usize,

    /// Independent variable at the start of the step.
    pub x: f64,

    /// Dependent variable at the start of the step.
    pub y: f64,

    /// `dy/dx = k·y` evaluated at `(x, y)`.
    pub slope: f64,

    /// `slope · h`, the change in `y` over the step.
    pub delta_y: f64,

    /// Independent variable at the end of the step.
    pub x_next: f64,

    /// `y + delta_y`, the dependent variable at the end of the step.
    pub y_next: f64,
}
