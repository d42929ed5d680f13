//! Charts module - chart model and rendering

mod plotter;
mod renderer;
mod series;

pub use plotter::ChartPlotter;
pub use renderer::TextChartRenderer;
pub use series::{BarSeries, ChartKind};
