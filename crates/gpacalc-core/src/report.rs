//! Exportable report data with JSON persistence.
//!
//! A report is a snapshot of one calculator view taken at export time. The
//! figures are already computed; renderers only format them.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::statistics::{CumulativeStatistics, ImprovementStatistics, SemesterStatistics};

/// Semester GPA report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub department: String,
    pub semester_id: String,
    pub statistics: SemesterStatistics,
}

impl SemesterReport {
    /// `None` while no course of the semester has been attempted.
    pub fn build(semester_id: &str, statistics: SemesterStatistics, department: &str) -> Option<Self> {
        if statistics.attempted_credits <= 0.0 {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            department: department.to_string(),
            semester_id: semester_id.to_string(),
            statistics,
        })
    }
}

/// Cumulative GPA report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub department: String,
    pub statistics: CumulativeStatistics,
}

impl CumulativeReport {
    /// `None` while no semester contributes credits.
    pub fn build(statistics: CumulativeStatistics, department: &str) -> Option<Self> {
        if statistics.total_credits <= 0.0 {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            department: department.to_string(),
            statistics,
        })
    }
}

/// Improvement projection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub department: String,
    pub semester_id: String,
    /// GPA text the projection starts from, as entered.
    pub current_gpa: String,
    pub statistics: ImprovementStatistics,
}

impl ImprovementReport {
    /// `None` without a selected semester or when it carries no credits.
    pub fn build(
        semester_id: &str,
        current_gpa: &str,
        statistics: ImprovementStatistics,
        department: &str,
    ) -> Option<Self> {
        if semester_id.is_empty() || statistics.total_semester_credits <= 0.0 {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            department: department.to_string(),
            semester_id: semester_id.to_string(),
            current_gpa: current_gpa.to_string(),
            statistics,
        })
    }
}

/// Any exportable report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Semester(SemesterReport),
    Cumulative(CumulativeReport),
    Improvement(ImprovementReport),
}

impl Report {
    pub fn id(&self) -> Uuid {
        match self {
            Report::Semester(r) => r.id,
            Report::Cumulative(r) => r.id,
            Report::Improvement(r) => r.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Report::Semester(r) => r.created_at,
            Report::Cumulative(r) => r.created_at,
            Report::Improvement(r) => r.created_at,
        }
    }

    pub fn department(&self) -> &str {
        match self {
            Report::Semester(r) => &r.department,
            Report::Cumulative(r) => &r.department,
            Report::Improvement(r) => &r.department,
        }
    }

    /// Document heading.
    pub fn title(&self) -> String {
        match self {
            Report::Semester(r) => format!("Semester {} GPA Report", r.semester_id),
            Report::Cumulative(_) => "Cumulative GPA Report".to_string(),
            Report::Improvement(r) => format!("Semester {} Improvement Report", r.semester_id),
        }
    }

    /// File name without extension.
    pub fn file_stem(&self) -> String {
        match self {
            Report::Semester(r) => format!("GPA_Report_Semester_{}", r.semester_id),
            Report::Cumulative(_) => "CGPA_Report".to_string(),
            Report::Improvement(r) => format!("Improvement_Report_Semester_{}", r.semester_id),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse report JSON in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grade;
    use crate::statistics::{CourseRow, CumulativeRow};

    fn semester_stats() -> SemesterStatistics {
        SemesterStatistics {
            offered_credits: 4.5,
            attempted_credits: 3.0,
            secured_credits: 3.0,
            points_secured: 11.25,
            sgpa: 3.75,
            courses: vec![CourseRow {
                code: "EEE 101".into(),
                name: "Electrical Circuits I".into(),
                credits: 3.0,
                grade: Grade::A,
                points: Some(11.25),
            }],
        }
    }

    #[test]
    fn builders_refuse_empty_views() {
        assert!(SemesterReport::build("1", SemesterStatistics::default(), "Dept").is_none());
        assert!(CumulativeReport::build(CumulativeStatistics::default(), "Dept").is_none());
        assert!(ImprovementReport::build("", "3.0", ImprovementStatistics::default(), "Dept").is_none());

        let stats = ImprovementStatistics {
            total_semester_credits: 0.0,
            ..Default::default()
        };
        assert!(ImprovementReport::build("9", "3.0", stats, "Dept").is_none());
    }

    #[test]
    fn file_stems_follow_naming_scheme() {
        let semester = Report::Semester(SemesterReport::build("3", semester_stats(), "D").unwrap());
        assert_eq!(semester.file_stem(), "GPA_Report_Semester_3");

        let cumulative = Report::Cumulative(
            CumulativeReport::build(
                CumulativeStatistics {
                    total_points: 9.0,
                    total_credits: 3.0,
                    cgpa: 3.0,
                    semesters: vec![CumulativeRow {
                        semester_id: "1".into(),
                        credits: 3.0,
                        gpa: 3.0,
                        points: 9.0,
                    }],
                },
                "D",
            )
            .unwrap(),
        );
        assert_eq!(cumulative.file_stem(), "CGPA_Report");

        let improvement = Report::Improvement(
            ImprovementReport::build(
                "5",
                "2.5",
                ImprovementStatistics {
                    total_semester_credits: 18.0,
                    ..Default::default()
                },
                "D",
            )
            .unwrap(),
        );
        assert_eq!(improvement.file_stem(), "Improvement_Report_Semester_5");
        assert_eq!(improvement.title(), "Semester 5 Improvement Report");
    }

    #[test]
    fn json_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = Report::Semester(SemesterReport::build("1", semester_stats(), "Dept").unwrap());
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""kind": "semester""#));

        let loaded = Report::load_json(&path).unwrap();
        assert_eq!(loaded, report);
        assert_eq!(loaded.id(), report.id());
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = Report::load_json(Path::new("/nonexistent/report.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/report.json"));
    }
}
