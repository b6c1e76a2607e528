use std::iter::FusedIterator;

use super::{Input, Step};

/// A lazy, finite sequence of Euler steps for a fixed input.
///
/// Created by [`Input::steps`], which validates the input and fixes the
/// length. Cloning captures the current position, so a clone taken before
/// iterating replays the sequence from the start.
///
/// # Example
///
/// ```
/// use euler_solvers::euler::{Config, Input};
///
/// let steps = Input::new(-1.0, 0.0, 1.0, 1.0, 0.25).steps(&Config::default())?;
/// assert_eq!(steps.len(), 4);
///
/// let ys: Vec<f64> = steps.map(|step| step.y_next).collect();
/// assert_eq!(ys, vec![0.75, 0.5625, 0.421875, 0.31640625]);
/// # Ok::<(), euler_solvers::euler::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Steps {
    input: Input,
    index: usize,
    count: usize,
    y: f64,
}

impl Steps {
    pub(super) fn new(input: Input, count: usize) -> Self {
        Self {
            input,
            index: 0,
            count,
            y: input.y0,
        }
    }

    /// Returns the input this sequence integrates.
    #[must_use]
    pub fn input(&self) -> &Input {
        &self.input
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.index >= self.count {
            return None;
        }

        let y = self.y;
        let slope = self.input.equation().slope(y);
        let delta_y = slope * self.input.h;

        let step = Step {
            index: self.index,
            x: self.input.x_at(self.index),
            y,
            slope,
            delta_y,
            x_next: self.input.x_at(self.index + 1),
            y_next: y + delta_y,
        };

        self.index += 1;
        self.y = step.y_next;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}
