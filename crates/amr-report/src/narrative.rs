//! Plain-text narrative summary.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use amr_model::NarrativeSummary;

/// Render the narrative block shown on the console and written to disk.
pub fn render_narrative(summary: &NarrativeSummary) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "AMR surveillance summary");
    let _ = writeln!(text, "========================");
    let _ = writeln!(text, "Total isolates: {}", summary.total_isolates);
    let _ = writeln!(text, "MDR prevalence: {:.1}%", summary.mdr_percent);
    let _ = writeln!(text, "ESBL prevalence: {:.1}%", summary.esbl_percent);
    match summary.median_mar_index {
        Some(median) => {
            let _ = writeln!(text, "Median MAR index: {median:.3}");
        }
        None => {
            let _ = writeln!(text, "Median MAR index: n/a");
        }
    }
    let _ = writeln!(
        text,
        "High-risk isolates (MAR index > 0.2): {:.1}%",
        summary.high_risk_percent
    );
    if summary.top_resistant.is_empty() {
        let _ = writeln!(text, "Most resistant antibiotics: none");
    } else {
        let ranked: Vec<String> = summary
            .top_resistant
            .iter()
            .map(|entry| format!("{} ({} isolates)", entry.antibiotic, entry.resistant_isolates))
            .collect();
        let _ = writeln!(text, "Most resistant antibiotics: {}", ranked.join(", "));
    }
    text
}

pub fn write_narrative(summary: &NarrativeSummary, path: &Path) -> Result<()> {
    std::fs::write(path, render_narrative(summary))
        .with_context(|| format!("write {}", path.display()))
}
