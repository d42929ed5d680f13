//! Chart Series Module
//! The bar-series model shared by the window plotter and the terminal
//! renderer.

use clap::ValueEnum;
use std::fmt;

use crate::data::BrandTable;

/// The two charts the explorer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Share of voice per brand, in percent.
    Sov,
    /// Average sentiment per brand, on a -1..=1 scale.
    Sentiment,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Sov => "Share of Voice (SoV) — Smart Fan Search",
            ChartKind::Sentiment => "Average Sentiment by Brand",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ChartKind::Sov => "SoV (%)",
            ChartKind::Sentiment => "Sentiment Score (-1 = Negative, +1 = Positive)",
        }
    }

    /// Whether the chart draws a horizontal rule at zero. Sentiment bars
    /// extend both ways, so they get one.
    pub fn zero_line(&self) -> bool {
        matches!(self, ChartKind::Sentiment)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Sov => write!(f, "sov"),
            ChartKind::Sentiment => write!(f, "sentiment"),
        }
    }
}

/// Labels and values for one bar chart, in table order.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub zero_line: bool,
}

impl BarSeries {
    /// Build the series for one chart kind from the brand table.
    pub fn from_table(kind: ChartKind, table: &BrandTable) -> Self {
        let labels = table.records().iter().map(|r| r.brand.clone()).collect();
        let values = table
            .records()
            .iter()
            .map(|r| match kind {
                ChartKind::Sov => r.sov_percent,
                ChartKind::Sentiment => r.avg_sentiment,
            })
            .collect();

        Self {
            labels,
            values,
            title: kind.title().to_string(),
            x_label: "Brand".to_string(),
            y_label: kind.y_label().to_string(),
            zero_line: kind.zero_line(),
        }
    }
}
