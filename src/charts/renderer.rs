//! Text Chart Renderer
//! Renders a bar series as Unicode bars for terminals without a display.

use crate::charts::BarSeries;

/// Width of the longest bar, in block characters.
const BAR_WIDTH: usize = 40;

pub struct TextChartRenderer;

impl TextChartRenderer {
    /// Render the series as a titled block of horizontal labelled bars.
    /// Series with negative values get a centered zero axis; bars then
    /// extend left or right of it.
    pub fn render(series: &BarSeries) -> String {
        let mut out = String::new();
        let rule_width = series.title.chars().count().max(BAR_WIDTH);

        out.push_str(&series.title);
        out.push('\n');
        Self::push_rule(&mut out, rule_width);

        let present: Vec<f64> = series.values.iter().flatten().copied().collect();
        if present.is_empty() {
            out.push_str("  (no data)\n");
        } else {
            let label_width = series
                .labels
                .iter()
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(0);
            let bipolar = present.iter().any(|v| *v < 0.0);
            let max_abs = present.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));

            for (label, value) in series.labels.iter().zip(&series.values) {
                let line = if bipolar {
                    Self::bipolar_line(label, *value, label_width, max_abs)
                } else {
                    Self::positive_line(label, *value, label_width, max_abs)
                };
                out.push_str(&line);
                out.push('\n');
            }
        }

        Self::push_rule(&mut out, rule_width);
        out.push_str(&format!("  {} / {}\n", series.x_label, series.y_label));
        out
    }

    fn positive_line(label: &str, value: Option<f64>, label_width: usize, max_abs: f64) -> String {
        let prefix = format!("  {label:<label_width$} │");
        match value {
            Some(v) => {
                let len = Self::bar_len(v.abs(), max_abs, BAR_WIDTH);
                format!("{prefix}{} {v:.2}", "█".repeat(len))
            }
            None => format!("{prefix} n/a"),
        }
    }

    fn bipolar_line(label: &str, value: Option<f64>, label_width: usize, max_abs: f64) -> String {
        let half = BAR_WIDTH / 2;
        match value {
            Some(v) if v < 0.0 => {
                let len = Self::bar_len(v.abs(), max_abs, half);
                let pad = " ".repeat(half - len);
                format!("  {label:<label_width$} {pad}{}│ {v:.2}", "█".repeat(len))
            }
            Some(v) => {
                let len = Self::bar_len(v, max_abs, half);
                let pad = " ".repeat(half);
                format!("  {label:<label_width$} {pad}│{} {v:.2}", "█".repeat(len))
            }
            None => {
                let pad = " ".repeat(half);
                format!("  {label:<label_width$} {pad}│ n/a")
            }
        }
    }

    /// Bar length in blocks, proportional to the largest magnitude.
    fn bar_len(magnitude: f64, max_abs: f64, width: usize) -> usize {
        if max_abs <= 0.0 {
            return 0;
        }
        (magnitude / max_abs * width as f64).round() as usize
    }

    fn push_rule(out: &mut String, width: usize) {
        out.push_str(&"─".repeat(width));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{BarSeries, ChartKind};
    use crate::data::{BrandRecord, BrandTable};

    fn sample_table() -> BrandTable {
        let brands = ["Atomberg", "Havells", "Crompton", "Orient", "Usha"];
        let sov = [37.5, 25.0, 100.0 / 6.0, 12.5, 100.0 / 12.0];
        let sentiment = [0.35, 0.10, -0.20, 0.05, -0.10];

        let records = brands
            .iter()
            .zip(sov)
            .zip(sentiment)
            .map(|((brand, s), a)| BrandRecord {
                brand: brand.to_string(),
                mentions: None,
                sov_percent: Some(s),
                avg_sentiment: Some(a),
            })
            .collect();
        BrandTable::new(records, true)
    }

    #[test]
    fn sov_chart_lists_brands_in_table_order() {
        let series = BarSeries::from_table(ChartKind::Sov, &sample_table());
        let out = TextChartRenderer::render(&series);

        assert!(out.starts_with("Share of Voice (SoV) — Smart Fan Search\n"));
        let positions: Vec<usize> = ["Atomberg", "Havells", "Crompton", "Orient", "Usha"]
            .iter()
            .map(|b| out.find(b).unwrap_or_else(|| panic!("{b} missing")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(out.contains("Brand / SoV (%)"));
    }

    #[test]
    fn largest_value_fills_the_full_bar_width() {
        let series = BarSeries::from_table(ChartKind::Sov, &sample_table());
        let out = TextChartRenderer::render(&series);

        let atomberg_line = out
            .lines()
            .find(|l| l.contains("Atomberg"))
            .expect("Atomberg row");
        let blocks = atomberg_line.chars().filter(|c| *c == '█').count();
        assert_eq!(blocks, 40);
        assert!(atomberg_line.ends_with("37.50"));
    }

    #[test]
    fn negative_sentiment_bars_sit_left_of_the_axis() {
        let series = BarSeries::from_table(ChartKind::Sentiment, &sample_table());
        let out = TextChartRenderer::render(&series);

        let crompton_line = out
            .lines()
            .find(|l| l.contains("Crompton"))
            .expect("Crompton row");
        let axis = crompton_line.find('│').expect("axis");
        let bar = crompton_line.find('█').expect("bar");
        assert!(bar < axis, "negative bar should precede the axis");
        assert!(crompton_line.ends_with("-0.20"));

        let atomberg_line = out
            .lines()
            .find(|l| l.contains("Atomberg"))
            .expect("Atomberg row");
        let axis = atomberg_line.find('│').expect("axis");
        let bar = atomberg_line.find('█').expect("bar");
        assert!(bar > axis, "positive bar should follow the axis");
    }

    #[test]
    fn missing_values_render_as_na_without_a_bar() {
        let table = BrandTable::new(
            vec![
                BrandRecord {
                    brand: "Alpha".to_string(),
                    mentions: None,
                    sov_percent: Some(60.0),
                    avg_sentiment: None,
                },
                BrandRecord {
                    brand: "Beta".to_string(),
                    mentions: None,
                    sov_percent: None,
                    avg_sentiment: None,
                },
            ],
            false,
        );
        let series = BarSeries::from_table(ChartKind::Sov, &table);
        let out = TextChartRenderer::render(&series);

        let beta_line = out.lines().find(|l| l.contains("Beta")).expect("Beta row");
        assert!(beta_line.contains("n/a"));
        assert!(!beta_line.contains('█'));
    }

    #[test]
    fn empty_series_says_so() {
        let series = BarSeries::from_table(ChartKind::Sov, &BrandTable::new(Vec::new(), false));
        let out = TextChartRenderer::render(&series);
        assert!(out.contains("(no data)"));
    }
}
