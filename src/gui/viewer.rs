//! Chart Window Module
//! A dedicated viewer window for one chart, run in its own process.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context};
use tracing::info;

use crate::charts::{BarSeries, ChartKind, ChartPlotter};
use crate::data::BrandTable;

/// Shows a single bar chart until the user closes the window.
struct ChartWindow {
    series: BarSeries,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.series.title);
            ui.separator();
            ChartPlotter::draw_bar_chart(ui, &self.series);
        });
    }
}

/// Run the viewer event loop on the current thread. Returns when the
/// window is closed.
pub fn run_chart_window(kind: ChartKind, table: &BrandTable) -> eframe::Result<()> {
    let series = BarSeries::from_table(kind, table);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 500.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        kind.title(),
        options,
        Box::new(move |_cc| Ok(Box::new(ChartWindow { series }))),
    )
}

/// Spawn the viewer as a child process and block until it is closed.
/// Each window gets a fresh process because the windowing event loop
/// can only be started once per process.
pub fn open_chart_window(kind: ChartKind, data_path: &Path) -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("locate current executable")?;

    info!("opening {kind} chart window");
    let status = Command::new(exe)
        .arg("--chart")
        .arg(kind.to_string())
        .arg(data_path)
        .status()
        .context("launch chart window process")?;

    if !status.success() {
        bail!("chart window exited with {status}");
    }
    Ok(())
}

/// Best-effort check for a usable display server.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}
