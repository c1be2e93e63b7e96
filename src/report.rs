//! Rendering of the final counts

use serde::Serialize;

use crate::stats::Accumulator;

/// One reported line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: String,
    pub count: u64,
}

/// Entries ordered ascending by count, then by path
pub fn entries(acc: &Accumulator) -> Vec<ReportEntry> {
    acc.sorted()
        .into_iter()
        .map(|(path, count)| ReportEntry { path, count })
        .collect()
}

/// `<path>: <count>` lines, one per entry, each newline terminated
pub fn render_text(acc: &Accumulator) -> String {
    let mut out = String::new();
    for entry in entries(acc) {
        out.push_str(&entry.path);
        out.push_str(": ");
        out.push_str(&entry.count.to_string());
        out.push('\n');
    }
    out
}

/// JSON array of `{"path": .., "count": ..}` objects in report order
pub fn render_json(acc: &Accumulator) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&entries(acc))
}
