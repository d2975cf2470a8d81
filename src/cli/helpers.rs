//! Shared helper functions for CLI commands
//!
//! Rendering of an [`ImportResult`] in each output format lives here so the
//! import command only decides where the text goes.

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::core::ImportResult;

/// Truncate a string to max_len, adding "..." if truncated
///
/// Counts characters, not bytes, so multi-byte titles are cut safely.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render an import result in the requested format
pub fn render_result(result: &ImportResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result).into_diagnostic(),
        OutputFormat::Yaml => serde_yml::to_string(result).into_diagnostic(),
        OutputFormat::Table => Ok(render_table(result)),
    }
}

/// Markdown preview of the issues, one row each
fn render_table(result: &ImportResult) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Title", "Status", "Estimate", "Priority", "Assignee"]);

    for (idx, issue) in result.issues.iter().enumerate() {
        builder.push_record([
            (idx + 1).to_string(),
            truncate_str(&issue.title, 60),
            issue.status.to_string(),
            issue.estimate.map(|e| e.to_string()).unwrap_or_default(),
            issue.priority.to_string(),
            issue.assignee_id.clone(),
        ]);
    }

    builder.build().with(Style::markdown()).to_string()
}
