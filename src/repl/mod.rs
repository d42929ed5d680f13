//! REPL module - line-oriented interactive session

mod commands;
mod session;

pub use commands::Command;
pub use session::{ChartDisplay, ReplSession};
