//! HTML report generator.
//!
//! Produces a self-contained, print-ready A4 document with all CSS inlined.
//! Printing it from a browser yields the paginated report.

use std::path::Path;

use anyhow::{Context, Result};
use gpacalc_core::report::Report;

use crate::document::{layout, FOOTER};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML document from a report.
pub fn generate_html(report: &Report) -> String {
    let doc = layout(report);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(&doc.title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&doc.title)));
    html.push_str(&format!(
        "<p class=\"department\">{}</p>\n",
        html_escape(&doc.department)
    ));
    if let Some(subtitle) = &doc.subtitle {
        html.push_str(&format!("<h2>{}</h2>\n", html_escape(subtitle)));
    }
    html.push_str("</header>\n");

    html.push_str("<table>\n<thead><tr>");
    for column in &doc.columns {
        html.push_str(&format!("<th>{}</th>", html_escape(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &doc.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str("<section class=\"summary\">\n<dl>\n");
    for (label, value) in &doc.summary {
        html.push_str(&format!(
            "<dt>{}:</dt><dd>{}</dd>\n",
            html_escape(label),
            html_escape(value)
        ));
    }
    html.push_str("</dl>\n");
    html.push_str(&format!(
        "<div class=\"headline\"><span class=\"label\">{}</span><span class=\"value\">{}</span><span class=\"band\">{}</span></div>\n",
        html_escape(doc.headline.0),
        html_escape(&doc.headline.1),
        doc.band.label()
    ));
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<footer>{} | {}</footer>\n",
        html_escape(FOOTER),
        doc.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &Report, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))
}

const CSS: &str = r#"
@page {
  size: A4;
  margin: 18mm 14mm 22mm;
  @bottom-left { content: "Generated by GPA & CGPA Calculator"; font-size: 9pt; color: #6b7280; }
  @bottom-right { content: "Page " counter(page) " of " counter(pages); font-size: 9pt; color: #6b7280; }
}
body { font-family: Helvetica, Arial, sans-serif; color: #1f2937; margin: 0 auto; max-width: 182mm; }
header { text-align: center; margin-bottom: 1.5rem; }
h1 { font-size: 22pt; margin: 0 0 0.3rem; }
h2 { font-size: 14pt; text-align: left; margin: 1.5rem 0 0.5rem; }
.department { font-size: 11pt; color: #4b5563; margin: 0; }
table { border-collapse: collapse; width: 100%; font-size: 10pt; }
thead { display: table-header-group; }
tr { page-break-inside: avoid; }
th { background: #4f46e5; color: #fff; text-align: left; padding: 6px 8px; border: 1px solid #4f46e5; }
td { padding: 5px 8px; border: 1px solid #e2e8f0; }
.summary { display: flex; justify-content: space-between; align-items: center; margin-top: 1.5rem; padding: 12px 16px; background: #f1f5f9; border: 1px solid #e2e8f0; border-radius: 6px; page-break-inside: avoid; }
.summary dl { display: grid; grid-template-columns: auto auto; gap: 4px 16px; margin: 0; font-size: 10pt; }
.summary dt { color: #4b5563; }
.summary dd { margin: 0; text-align: right; }
.headline { display: flex; flex-direction: column; align-items: flex-end; }
.headline .label { font-weight: bold; font-size: 12pt; }
.headline .value { font-weight: bold; font-size: 28pt; color: #4f46e5; }
.headline .band { font-size: 10pt; color: #4b5563; }
footer { margin-top: 2rem; font-size: 9pt; color: #6b7280; }
@media print { footer { display: none; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fixtures;

    #[test]
    fn html_escape_basic() {
        assert_eq!(html_escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;/b&gt;");
    }

    #[test]
    fn document_is_print_ready() {
        let html = generate_html(&fixtures::semester());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("size: A4"));
        assert!(html.contains("<footer>Generated by GPA &amp; CGPA Calculator"));
        assert!(html.contains("<h1>Semester 1 GPA Report</h1>"));
        assert!(html.contains("Dept of EEE"));
    }

    #[test]
    fn course_names_are_escaped() {
        let html = generate_html(&fixtures::semester());
        assert!(html.contains("Circuits &lt;I&gt; &amp; Lab"));
        assert!(!html.contains("<I>"));
    }

    #[test]
    fn figures_are_rounded() {
        let html = generate_html(&fixtures::cumulative());
        assert!(html.contains("<td>Semester 1</td><td>7.50</td><td>3.250</td><td>24.38</td>"));
        assert!(html.contains("<span class=\"value\">3.321</span>"));
        assert!(html.contains("<dt>Total Credits Completed:</dt><dd>10.50</dd>"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let report = fixtures::improvement();
        let path = dir.path().join("out").join(format!("{}.html", report.file_stem()));

        write_html_report(&report, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Updated GPA"));
        assert!(path.ends_with("Improvement_Report_Semester_1.html"));
    }
}
