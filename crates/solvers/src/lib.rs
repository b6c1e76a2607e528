//! Numerical solvers for the Euler explorer.
//!
//! # Solvers
//!
//! - [`euler`] — forward Euler integration of `dy/dx = k·y`, with each step
//!   compared against the closed-form solution
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for inputs, steps, error
//!   records, solutions, and summaries.

pub mod euler;
