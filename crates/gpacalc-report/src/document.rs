//! Format-independent report layout.
//!
//! Every renderer draws the same document: a heading, one table, a list of
//! summary figures, and a headline GPA. Values are formatted here so the
//! output formats cannot disagree on rounding.

use chrono::{DateTime, Utc};
use gpacalc_core::report::Report;
use gpacalc_core::statistics::{performance_band, CourseRow, PerformanceBand};

/// Footer line printed on every page.
pub const FOOTER: &str = "Generated by GPA & CGPA Calculator";

/// A report laid out for rendering. All cells are final text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub department: String,
    /// Line under the heading, e.g. "Semester: 3".
    pub subtitle: Option<String>,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub summary: Vec<(&'static str, String)>,
    /// Label and value of the headline figure.
    pub headline: (&'static str, String),
    pub band: PerformanceBand,
    pub created_at: DateTime<Utc>,
}

/// Credits and points: two decimals.
pub fn fmt_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// GPA values: three decimals.
pub fn fmt_gpa(value: f64) -> String {
    format!("{value:.3}")
}

fn course_rows(courses: &[CourseRow]) -> Vec<Vec<String>> {
    courses
        .iter()
        .map(|row| {
            vec![
                row.code.clone(),
                row.name.clone(),
                fmt_amount(row.credits),
                row.grade.to_string(),
                row.points.map(fmt_amount).unwrap_or_else(|| "N/A".to_string()),
            ]
        })
        .collect()
}

const COURSE_COLUMNS: [&str; 5] = ["Course Code", "Course Name", "Credits", "Grade", "Points"];

/// Lay out a report.
pub fn layout(report: &Report) -> ReportDocument {
    match report {
        Report::Semester(r) => {
            let s = &r.statistics;
            ReportDocument {
                title: report.title(),
                department: r.department.clone(),
                subtitle: Some(format!("Semester: {}", r.semester_id)),
                columns: COURSE_COLUMNS.to_vec(),
                rows: course_rows(&s.courses),
                summary: vec![
                    ("Credit Offered", fmt_amount(s.offered_credits)),
                    ("Credit Attempted", fmt_amount(s.attempted_credits)),
                    ("Credit Secured", fmt_amount(s.secured_credits)),
                    ("Points Secured", fmt_amount(s.points_secured)),
                ],
                headline: ("GPA", fmt_gpa(s.sgpa)),
                band: performance_band(s.sgpa),
                created_at: r.created_at,
            }
        }
        Report::Cumulative(r) => {
            let s = &r.statistics;
            ReportDocument {
                title: report.title(),
                department: r.department.clone(),
                subtitle: None,
                columns: vec!["Semester", "Semester Credits", "GPA", "Points Secured"],
                rows: s
                    .semesters
                    .iter()
                    .map(|row| {
                        vec![
                            format!("Semester {}", row.semester_id),
                            fmt_amount(row.credits),
                            fmt_gpa(row.gpa),
                            fmt_amount(row.points),
                        ]
                    })
                    .collect(),
                summary: vec![
                    ("Total Credits Completed", fmt_amount(s.total_credits)),
                    ("Total Points Secured", fmt_amount(s.total_points)),
                ],
                headline: ("CGPA", fmt_gpa(s.cgpa)),
                band: performance_band(s.cgpa),
                created_at: r.created_at,
            }
        }
        Report::Improvement(r) => {
            let s = &r.statistics;
            let current = if r.current_gpa.is_empty() {
                "-".to_string()
            } else {
                r.current_gpa.clone()
            };
            ReportDocument {
                title: report.title(),
                department: r.department.clone(),
                subtitle: Some(format!(
                    "Semester: {} | Current GPA: {current}",
                    r.semester_id
                )),
                columns: COURSE_COLUMNS.to_vec(),
                rows: course_rows(&s.courses),
                summary: vec![
                    ("Semester Credits", fmt_amount(s.total_semester_credits)),
                    ("Current Points", fmt_amount(s.current_secured_points)),
                    ("Improved Course Credits", fmt_amount(s.improved_credits_count)),
                    ("Improved Course Points", fmt_amount(s.improved_course_points)),
                    ("Updated Points", fmt_amount(s.updated_secured_points)),
                ],
                headline: ("Updated GPA", fmt_gpa(s.updated_gpa)),
                band: performance_band(s.updated_gpa),
                created_at: r.created_at,
            }
        }
    }
}
