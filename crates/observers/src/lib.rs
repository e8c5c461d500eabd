//! Reusable observers for Helm solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits that let one observer work with many
//!   event and action types ([`HasStep`], [`CanStopEarly`])
//! - [`LogObserver`]: reports progress through `tracing`
//!
//! # Features
//!
//! - `plot`: enables [`PlotObserver`] for viewing traces in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log;

pub use log::LogObserver;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
