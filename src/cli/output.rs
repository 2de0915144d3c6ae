//! Output rendering for the termtally CLI.

use crate::error::Result;
use crate::frequency::AnalysisReport;

/// Render a report as JSON.
///
/// Reports with two or more entries are pretty-printed (2-space indent);
/// single-entry reports and the error value render compactly. Non-ASCII
/// keys and messages are emitted as-is, never escaped.
pub fn render_report(report: &AnalysisReport) -> Result<String> {
    if report.len() >= 2 {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Print a report to stdout.
pub fn print_report(report: &AnalysisReport) -> Result<()> {
    println!("{}", render_report(report)?);
    Ok(())
}
