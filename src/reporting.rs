//! Rendering of audit results.

pub mod console;
pub mod json;

use crate::types::AuditReport;
use anyhow::Result;

/// Output format for `usecompass check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Renders `report` in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(report)),
        OutputFormat::Json => json::render(report),
    }
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
