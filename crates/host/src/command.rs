use masshaul_engine::{render, run, ReportResult, ReportStyle};

use crate::document::DocumentView;
use crate::error::SelectionError;

/// Everything a host needs after one report command: the structured result
/// plus the rendered text.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub report: ReportResult,
    pub text: String,
}

impl CommandOutput {
    /// One-line human summary for command echo and log panes.
    pub fn summary_line(&self) -> String {
        let s = &self.report.summary;
        let mut line = format!(
            "{}: {} row(s) from {} material list(s), cut {:.2}, fill {:.2}, net {:.2}",
            self.report.meta.alignment, s.rows, s.lists, s.total_cut, s.total_fill, s.net_volume
        );
        if s.faults > 0 {
            line.push_str(&format!(", {} record(s) skipped", s.faults));
        }
        line
    }

    /// The structured result as pretty JSON, for automation consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report)
    }
}

/// The one external trigger: resolve the selection, run the engine over the
/// document, render the table.
///
/// Only a selection failure aborts. Contained record faults ride in
/// `report.faults`, and a document with no matching data yields the no-data
/// notice as `text`.
pub fn run_report<D: DocumentView + ?Sized>(
    doc: &D,
    style: &ReportStyle,
) -> Result<CommandOutput, SelectionError> {
    let alignment = doc.selected_alignment()?;
    let report = run(doc, &alignment);
    let text = render(&report.table, style);
    Ok(CommandOutput { report, text })
}
