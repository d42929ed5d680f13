//! GUI module - the chart viewer window

mod viewer;

pub use viewer::{display_available, open_chart_window, run_chart_window};
