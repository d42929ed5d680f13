//! BrandLens - Brand Share-of-Voice & Sentiment Explorer
//!
//! Loads brand metrics from CSV (with built-in sample data as fallback)
//! and serves an interactive command loop with bar-chart windows.

mod charts;
mod data;
mod gui;
mod repl;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use charts::ChartKind;
use data::{DataLoader, DEFAULT_DATA_FILE};
use repl::{ChartDisplay, ReplSession};

#[derive(Parser, Debug)]
#[command(name = "brandlens", version, about = "Brand Share-of-Voice & Sentiment Explorer")]
struct Args {
    /// CSV file with brand metrics; sample data is used when it does not exist
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Render one chart window and exit (used for spawned viewer processes)
    #[arg(long, hide = true, value_enum)]
    chart: Option<ChartKind>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let table = DataLoader::new(&args.data)
        .load()
        .with_context(|| format!("loading brand metrics from {}", args.data.display()))?;

    if let Some(kind) = args.chart {
        return gui::run_chart_window(kind, &table)
            .map_err(|e| anyhow::anyhow!("chart window failed: {e}"));
    }

    let session = ReplSession::new(table, ChartDisplay::detect(), args.data);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}
