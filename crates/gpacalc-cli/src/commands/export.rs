//! The `gpacalc export` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use gpacalc_report::{write_html_report, write_markdown_report};

use crate::context::Session;
use crate::{ExportFormat, ExportView};

pub fn execute(
    config_path: Option<&Path>,
    view: ExportView,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let session = Session::open(config_path)?;
    let department = &session.config.department;

    let report = match view {
        ExportView::Sgpa => session.calc.semester_report(department),
        ExportView::Cgpa => session.calc.cumulative_report(department),
        ExportView::Improvement => session.calc.improvement_report(department),
    };
    let Some(report) = report else {
        println!("Nothing to export: {}", unavailable_reason(view));
        return Ok(());
    };

    let output_dir = output.unwrap_or_else(|| session.config.report_dir.clone());
    let stem = report.file_stem();

    if matches!(format, ExportFormat::Html | ExportFormat::All) {
        let path = output_dir.join(format!("{stem}.html"));
        write_html_report(&report, &path)?;
        println!("HTML report: {}", path.display());
    }
    if matches!(format, ExportFormat::Markdown | ExportFormat::All) {
        let path = output_dir.join(format!("{stem}.md"));
        write_markdown_report(&report, &path)?;
        println!("Markdown report: {}", path.display());
    }
    if matches!(format, ExportFormat::Json | ExportFormat::All) {
        let path = output_dir.join(format!("{stem}.json"));
        report.save_json(&path)?;
        println!("JSON report: {}", path.display());
    }

    tracing::info!(id = %report.id(), "exported {stem}");
    Ok(())
}

fn unavailable_reason(view: ExportView) -> &'static str {
    match view {
        ExportView::Sgpa => "no course of the selected semester has a grade.",
        ExportView::Cgpa => "no semester has a valid GPA.",
        ExportView::Improvement => "no semester with credits is selected.",
    }
}
