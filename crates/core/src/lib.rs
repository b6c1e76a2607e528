//! Core traits and types shared by the Euler explorer crates.
//!
//! This crate defines the abstractions that the solver, observers, and front
//! ends build on:
//!
//! - [`GrowthEquation`] — the equation `dy/dx = k·y`, its slope, and its
//!   closed-form solution
//! - [`InitialValue`] — the initial condition `(x₀, y₀)`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod equation;
mod observer;

pub use equation::{GrowthEquation, InitialValue};
pub use observer::Observer;
