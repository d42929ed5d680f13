//! Chart Plotter Module
//! Draws interactive bar charts in the viewer window using egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, HLine, LineStyle, Plot};

use crate::charts::BarSeries;

/// Bar colors cycled per brand on unsigned charts.
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
];

pub const POSITIVE_COLOR: Color32 = Color32::from_rgb(44, 160, 44);
pub const NEGATIVE_COLOR: Color32 = Color32::from_rgb(214, 39, 40);

/// Draws the bar series with brand names on the x-axis.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Signed charts color bars by sign; unsigned charts cycle the palette.
    fn bar_color(index: usize, value: f64, signed: bool) -> Color32 {
        if signed {
            if value < 0.0 {
                NEGATIVE_COLOR
            } else {
                POSITIVE_COLOR
            }
        } else {
            PALETTE[index % PALETTE.len()]
        }
    }

    /// Draw one bar per brand at integer x positions; brands without a
    /// value leave a gap. A dashed rule marks zero on signed charts.
    pub fn draw_bar_chart(ui: &mut egui::Ui, series: &BarSeries) {
        let labels = series.labels.clone();
        let zero_line = series.zero_line;
        let height = ui.available_height();

        let bars: Vec<Bar> = series
            .labels
            .iter()
            .zip(&series.values)
            .enumerate()
            .filter_map(|(i, (label, value))| {
                value.map(|v| {
                    Bar::new(i as f64, v)
                        .width(0.6)
                        .name(label)
                        .fill(Self::bar_color(i, v, zero_line))
                })
            })
            .collect();

        Plot::new(series.title.clone())
            .height(height)
            .x_axis_label(series.x_label.clone())
            .y_axis_label(series.y_label.clone())
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 0.3 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                if zero_line {
                    plot_ui.hline(
                        HLine::new(0.0)
                            .color(Color32::GRAY)
                            .width(1.0)
                            .style(LineStyle::Dashed { length: 8.0 }),
                    );
                }
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}
