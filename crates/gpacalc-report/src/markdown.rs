//! Markdown report generator.

use std::path::Path;

use anyhow::{Context, Result};
use gpacalc_core::report::Report;

use crate::document::{layout, FOOTER};

/// Pipes would split a table cell.
fn md_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Generate a Markdown document from a report.
pub fn generate_markdown(report: &Report) -> String {
    let doc = layout(report);
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", doc.title));
    md.push_str(&format!("_{}_\n\n", doc.department));
    if let Some(subtitle) = &doc.subtitle {
        md.push_str(&format!("**{subtitle}**\n\n"));
    }

    md.push_str(&format!("| {} |\n", doc.columns.join(" | ")));
    md.push_str(&format!("|{}\n", "---|".repeat(doc.columns.len())));
    for row in &doc.rows {
        let cells: Vec<String> = row.iter().map(|c| md_cell(c)).collect();
        md.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    md.push('\n');

    md.push_str("## Summary\n\n");
    for (label, value) in &doc.summary {
        md.push_str(&format!("- {label}: {value}\n"));
    }
    md.push_str(&format!(
        "\n**{}: {}** ({})\n\n",
        doc.headline.0,
        doc.headline.1,
        doc.band.label()
    ));

    md.push_str(&format!(
        "---\n{FOOTER} on {}\n",
        doc.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &Report, path: &Path) -> Result<()> {
    let md = generate_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, md)
        .with_context(|| format!("failed to write Markdown report to {}", path.display()))
}
