//! gpacalc-report: Report rendering.
//!
//! Turns [`Report`](gpacalc_core::report::Report) snapshots into a
//! print-ready HTML document or a Markdown summary.

pub mod document;
pub mod html;
pub mod markdown;

pub use document::{layout, ReportDocument};
pub use html::{generate_html, write_html_report};
pub use markdown::{generate_markdown, write_markdown_report};
