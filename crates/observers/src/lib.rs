//! Reusable observers for the Euler explorer.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! watching an Euler solve as it runs.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasAbsoluteError`], [`HasRelativeError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ErrorLimit`] — stops a solve once the error grows past a threshold
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for comparing the Euler trajectory with
//!   the exact solution in an egui window. This feature adds dependencies on
//!   `eframe` and `egui_plot`.
//!
//! [`Observer`]: euler_core::Observer
//! [`HasAbsoluteError`]: traits::HasAbsoluteError
//! [`HasRelativeError`]: traits::HasRelativeError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod limit;

#[cfg(feature = "plot")]
mod plot;

pub use limit::ErrorLimit;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
