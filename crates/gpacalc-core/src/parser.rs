//! TOML grade table parser.
//!
//! Loads a curriculum and grade-point scale from a TOML file, and checks
//! it for common authoring mistakes.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Course, Grade, GradeTable, Semester};

/// Intermediate TOML structure for grade table files.
#[derive(Debug, Deserialize)]
struct TomlGradeTable {
    #[serde(default)]
    grade_points: BTreeMap<String, f64>,
    #[serde(default)]
    semesters: Vec<TomlSemester>,
}

#[derive(Debug, Deserialize)]
struct TomlSemester {
    id: String,
    #[serde(default)]
    courses: Vec<TomlCourse>,
}

#[derive(Debug, Deserialize)]
struct TomlCourse {
    code: String,
    name: String,
    credits: f64,
}

/// Parse a grade table file.
pub fn parse_grade_table(path: &Path) -> Result<GradeTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read grade table: {}", path.display()))?;

    parse_grade_table_str(&content, path)
}

/// Parse a TOML string into a `GradeTable` (useful for testing).
///
/// Symbols listed under `[grade_points]` override the standard scale;
/// symbols not listed keep their standard value.
pub fn parse_grade_table_str(content: &str, source_path: &Path) -> Result<GradeTable> {
    let parsed: TomlGradeTable = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut grade_points = GradeTable::default_grade_points();
    for (symbol, point) in parsed.grade_points {
        let grade: Grade = symbol
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{}: {}", source_path.display(), e))?;
        grade_points.insert(grade, point);
    }

    let semesters = parsed
        .semesters
        .into_iter()
        .map(|s| {
            Semester::new(
                s.id,
                s.courses
                    .into_iter()
                    .map(|c| Course::new(c.code, c.name, c.credits))
                    .collect(),
            )
        })
        .collect();

    Ok(GradeTable::new(semesters).with_grade_points(grade_points))
}

/// A warning from grade table validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The semester ID (if applicable).
    pub semester_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a grade table for common issues.
///
/// Warnings are advisory; the calculator still accepts the table.
pub fn validate_grade_table(table: &GradeTable) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_semesters = HashSet::new();
    for semester in &table.semesters {
        if !seen_semesters.insert(semester.id.as_str()) {
            warnings.push(ValidationWarning {
                semester_id: Some(semester.id.clone()),
                message: format!("duplicate semester ID: {}", semester.id),
            });
        }

        if semester.courses.is_empty() {
            warnings.push(ValidationWarning {
                semester_id: Some(semester.id.clone()),
                message: "semester has no courses".into(),
            });
        }

        let mut seen_codes = HashSet::new();
        for course in &semester.courses {
            if !seen_codes.insert(course.code.as_str()) {
                warnings.push(ValidationWarning {
                    semester_id: Some(semester.id.clone()),
                    message: format!("duplicate course code: {}", course.code),
                });
            }
            if !(course.credits > 0.0) {
                warnings.push(ValidationWarning {
                    semester_id: Some(semester.id.clone()),
                    message: format!(
                        "course {} has non-positive credits: {}",
                        course.code, course.credits
                    ),
                });
            }
        }
    }

    for (grade, point) in &table.grade_points {
        if !grade.is_attempted() {
            warnings.push(ValidationWarning {
                semester_id: None,
                message: "N/A has a grade point; it will be ignored".into(),
            });
        } else if !(0.0..=4.0).contains(point) {
            warnings.push(ValidationWarning {
                semester_id: None,
                message: format!("grade point for {grade} is outside [0, 4]: {point}"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[grade_points]
"A+" = 4.0
"A" = 3.7

[[semesters]]
id = "1"

[[semesters.courses]]
code = "EEE 101"
name = "Electrical Circuits I"
credits = 3.0

[[semesters.courses]]
code = "EEE 102"
name = "Electrical Circuits I Sessional"
credits = 1.5

[[semesters]]
id = "2"

[[semesters.courses]]
code = "EEE 121"
name = "Electrical Circuits II"
credits = 3.0
"#;

    #[test]
    fn parse_valid_toml() {
        let table = parse_grade_table_str(VALID_TOML, &PathBuf::from("table.toml")).unwrap();
        assert_eq!(table.semesters.len(), 2);
        assert_eq!(table.courses("1").len(), 2);
        assert_eq!(table.courses("1")[1].code, "EEE 102");
        assert_eq!(table.semester_credits("1"), 4.5);
        assert_eq!(table.grade_point(Grade::A), Some(3.7));
        // Unlisted symbols keep the standard value.
        assert_eq!(table.grade_point(Grade::B), Some(3.0));
    }

    #[test]
    fn parse_unknown_grade_symbol() {
        let toml = r#"
[grade_points]
"E" = 1.0
"#;
        let err = parse_grade_table_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("unknown grade"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_grade_table_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_flags_authoring_mistakes() {
        let toml = r#"
[grade_points]
"A+" = 4.5
"N/A" = 0.0

[[semesters]]
id = "1"

[[semesters.courses]]
code = "X 1"
name = "First"
credits = 3.0

[[semesters.courses]]
code = "X 1"
name = "Second"
credits = 0.0

[[semesters]]
id = "2"
"#;
        let table = parse_grade_table_str(toml, &PathBuf::from("t.toml")).unwrap();
        let warnings = validate_grade_table(&table);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("duplicate course code")));
        assert!(messages.iter().any(|m| m.contains("non-positive credits")));
        assert!(messages.iter().any(|m| m.contains("no courses")));
        assert!(messages.iter().any(|m| m.contains("outside [0, 4]")));
        assert!(messages.iter().any(|m| m.contains("N/A has a grade point")));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.toml");
        std::fs::write(&path, VALID_TOML).unwrap();

        let table = parse_grade_table(&path).unwrap();
        assert_eq!(table.semesters.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = parse_grade_table(&PathBuf::from("no-such-table.toml"));
        assert!(result.is_err());
    }
}
