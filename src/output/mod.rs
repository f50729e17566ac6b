//! Output formatting for CLI commands.

use crate::cli::args::CliOutputFormat;

/// Trait for command outputs that can be formatted in multiple ways
pub trait Output {
    /// Format as machine-readable JSON
    fn to_json(&self) -> String;

    /// Format as human-readable text
    fn to_text(&self) -> String;

    /// Format according to the given output format
    fn format(&self, format: CliOutputFormat) -> String {
        match format {
            CliOutputFormat::Json => self.to_json(),
            CliOutputFormat::Text => self.to_text(),
        }
    }
}
