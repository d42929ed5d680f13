//! REPL Session Module
//! The interactive loop: banner, prompt, dispatch, farewell.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::warn;

use crate::charts::{BarSeries, ChartKind, TextChartRenderer};
use crate::data::BrandTable;
use crate::gui;
use crate::repl::Command;

/// Where this session shows its charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartDisplay {
    /// A native window per chart, one child process each.
    Window,
    /// Unicode bars inline on the terminal.
    Terminal,
}

impl ChartDisplay {
    /// Pick the window surface when a display server is reachable.
    pub fn detect() -> Self {
        if gui::display_available() {
            ChartDisplay::Window
        } else {
            ChartDisplay::Terminal
        }
    }
}

/// One interactive session over a loaded brand table.
pub struct ReplSession {
    table: BrandTable,
    display: ChartDisplay,
    data_path: PathBuf,
}

impl ReplSession {
    pub fn new(table: BrandTable, display: ChartDisplay, data_path: PathBuf) -> Self {
        Self {
            table,
            display,
            data_path,
        }
    }

    /// Run the loop until `exit` or end of input. Reads and writes go
    /// through the given handles so sessions are scriptable.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        self.print_banner(output)?;

        let mut line = String::new();
        loop {
            write!(output, "\nEnter command: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Command::Exit => {
                    writeln!(output, "Exiting BrandLens. Goodbye!")?;
                    break;
                }
                Command::BrandInfo { name } if name.is_empty() => {
                    writeln!(output, "Please specify a brand name after 'brand info'.")?;
                }
                Command::BrandInfo { name } => {
                    writeln!(output, "{}", self.table.lookup(&name))?;
                }
                Command::ShowChart(kind) => {
                    self.show_chart(kind, output)?;
                }
                Command::Unknown => {
                    writeln!(output, "Unknown command. Please try again.")?;
                }
            }
        }
        Ok(())
    }

    fn print_banner<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Welcome to BrandLens!")?;
        writeln!(output, "You can ask about brand performance or command plots.")?;
        writeln!(output, "Examples:")?;
        writeln!(output, "- brand info Atomberg")?;
        writeln!(output, "- show sov chart")?;
        writeln!(output, "- show sentiment chart")?;
        writeln!(output, "- exit")?;
        Ok(())
    }

    /// Windowed charts block until dismissed. If the window cannot be
    /// shown the terminal rendering answers instead, and the loop
    /// continues either way.
    fn show_chart<W: Write>(&self, kind: ChartKind, output: &mut W) -> Result<()> {
        match self.display {
            ChartDisplay::Window => {
                if let Err(err) = gui::open_chart_window(kind, &self.data_path) {
                    warn!("chart window failed: {err:#}; rendering to terminal instead");
                    self.render_terminal(kind, output)?;
                }
            }
            ChartDisplay::Terminal => self.render_terminal(kind, output)?,
        }
        Ok(())
    }

    fn render_terminal<W: Write>(&self, kind: ChartKind, output: &mut W) -> Result<()> {
        let series = BarSeries::from_table(kind, &self.table);
        write!(output, "{}", TextChartRenderer::render(&series))?;
        Ok(())
    }
}
