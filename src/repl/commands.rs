//! Command Parser Module
//! Parses one line of user input into a session command.

use crate::charts::ChartKind;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `exit`
    Exit,
    /// `brand info <name>`; the name may be empty.
    BrandInfo { name: String },
    /// `show sov chart` / `show sentiment chart`
    ShowChart(ChartKind),
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parse a raw input line. Matching is case-insensitive; the brand
    /// name is whatever follows the `brand info` prefix, lowercased
    /// along with the rest of the line.
    pub fn parse(line: &str) -> Self {
        let input = line.trim().to_lowercase();

        if input == "exit" {
            Command::Exit
        } else if let Some(rest) = input.strip_prefix("brand info") {
            Command::BrandInfo {
                name: rest.trim().to_string(),
            }
        } else if input == "show sov chart" {
            Command::ShowChart(ChartKind::Sov)
        } else if input == "show sentiment chart" {
            Command::ShowChart(ChartKind::Sentiment)
        } else {
            Command::Unknown
        }
    }
}
