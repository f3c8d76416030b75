//! Core data model types for gpacalc.
//!
//! The grade table is the static curriculum: which courses each semester
//! offers, their credit weights, and what each letter grade is worth.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A letter grade, or the "not attempted" placeholder.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
    /// No grade entered yet. Never contributes to any sum except offered credits.
    #[default]
    #[serde(rename = "N/A")]
    NotAttempted,
}

impl Grade {
    /// Every grade in the order a grade picker lists them.
    pub const ALL: [Grade; 11] = [
        Grade::NotAttempted,
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    /// The symbol used on transcripts and in persisted records.
    pub fn symbol(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::NotAttempted => "N/A",
        }
    }

    /// Returns `true` for every grade except the "not attempted" placeholder.
    pub fn is_attempted(self) -> bool {
        self != Grade::NotAttempted
    }

    /// Returns `true` if the grade earns no credit.
    pub fn is_failing(self) -> bool {
        self == Grade::F
    }

    /// The standard four-point value of this grade.
    pub fn default_point(self) -> Option<f64> {
        match self {
            Grade::APlus => Some(4.00),
            Grade::A => Some(3.75),
            Grade::AMinus => Some(3.50),
            Grade::BPlus => Some(3.25),
            Grade::B => Some(3.00),
            Grade::BMinus => Some(2.75),
            Grade::CPlus => Some(2.50),
            Grade::C => Some(2.25),
            Grade::D => Some(2.00),
            Grade::F => Some(0.00),
            Grade::NotAttempted => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Grade::ALL
            .into_iter()
            .find(|g| g.symbol() == normalized)
            .or_else(|| (normalized == "NA").then_some(Grade::NotAttempted))
            .ok_or_else(|| format!("unknown grade: {}", s.trim()))
    }
}

/// A course offered in a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within its semester (e.g. "EEE 101").
    pub code: String,
    /// Human-readable course title.
    pub name: String,
    /// Credit weight.
    pub credits: f64,
}

impl Course {
    pub fn new(code: impl Into<String>, name: impl Into<String>, credits: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
        }
    }
}

/// One semester of the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester identifier (e.g. "1").
    pub id: String,
    /// Courses in curriculum order.
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn new(id: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            id: id.into(),
            courses,
        }
    }

    /// Sum of the credit weights of every course in the semester.
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

/// The static curriculum and grade-point scale.
///
/// Read-only once constructed; lookups only answer whether a key exists.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeTable {
    /// Semesters in curriculum order.
    pub semesters: Vec<Semester>,
    /// Numeric value of each letter grade.
    pub grade_points: BTreeMap<Grade, f64>,
}

impl GradeTable {
    /// Create a table using the standard four-point scale.
    pub fn new(semesters: Vec<Semester>) -> Self {
        Self {
            semesters,
            grade_points: Self::default_grade_points(),
        }
    }

    /// Replace the grade-point scale.
    pub fn with_grade_points(mut self, grade_points: BTreeMap<Grade, f64>) -> Self {
        self.grade_points = grade_points;
        self
    }

    /// The standard scale: A+ = 4.00 down to D = 2.00, F = 0.00.
    pub fn default_grade_points() -> BTreeMap<Grade, f64> {
        Grade::ALL
            .into_iter()
            .filter_map(|g| g.default_point().map(|p| (g, p)))
            .collect()
    }

    pub fn semester(&self, semester_id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == semester_id)
    }

    /// Courses of a semester; empty for an unknown id.
    pub fn courses(&self, semester_id: &str) -> &[Course] {
        self.semester(semester_id)
            .map(|s| s.courses.as_slice())
            .unwrap_or(&[])
    }

    pub fn course(&self, semester_id: &str, code: &str) -> Option<&Course> {
        self.courses(semester_id).iter().find(|c| c.code == code)
    }

    /// Total credits offered in a semester; 0 for an unknown id.
    pub fn semester_credits(&self, semester_id: &str) -> f64 {
        self.semester(semester_id)
            .map(Semester::total_credits)
            .unwrap_or(0.0)
    }

    /// Numeric value of a grade. "Not attempted" never has one.
    pub fn grade_point(&self, grade: Grade) -> Option<f64> {
        if !grade.is_attempted() {
            return None;
        }
        self.grade_points.get(&grade).copied()
    }

    pub fn semester_ids(&self) -> impl Iterator<Item = &str> {
        self.semesters.iter().map(|s| s.id.as_str())
    }

    /// Curriculum position of a semester, used to order report rows.
    pub fn position(&self, semester_id: &str) -> Option<usize> {
        self.semesters.iter().position(|s| s.id == semester_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> GradeTable {
        GradeTable::new(vec![
            Semester::new(
                "1",
                vec![
                    Course::new("EEE 101", "Electrical Circuits I", 3.0),
                    Course::new("EEE 102", "Electrical Circuits I Lab", 1.5),
                ],
            ),
            Semester::new("2", vec![Course::new("MATH 201", "Calculus II", 3.0)]),
        ])
    }

    #[test]
    fn grade_display_and_parse() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::NotAttempted.to_string(), "N/A");
        assert_eq!("a-".parse::<Grade>().unwrap(), Grade::AMinus);
        assert_eq!(" B+ ".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!("n/a".parse::<Grade>().unwrap(), Grade::NotAttempted);
        assert_eq!("NA".parse::<Grade>().unwrap(), Grade::NotAttempted);
        assert!("E".parse::<Grade>().is_err());
    }

    #[test]
    fn grade_serializes_as_symbol() {
        let json = serde_json::to_string(&Grade::BMinus).unwrap();
        assert_eq!(json, "\"B-\"");
        let parsed: Grade = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(parsed, Grade::NotAttempted);
    }

    #[test]
    fn default_scale_is_bounded() {
        let points = GradeTable::default_grade_points();
        assert_eq!(points.len(), 10);
        assert!(points.values().all(|p| (0.0..=4.0).contains(p)));
        assert_eq!(points.get(&Grade::A), Some(&3.75));
        assert!(!points.contains_key(&Grade::NotAttempted));
    }

    #[test]
    fn lookups_on_known_and_unknown_semesters() {
        let table = sample_table();
        assert_eq!(table.courses("1").len(), 2);
        assert!(table.courses("9").is_empty());
        assert_eq!(table.semester_credits("1"), 4.5);
        assert_eq!(table.semester_credits(""), 0.0);
        assert!(table.course("1", "EEE 102").is_some());
        assert!(table.course("2", "EEE 102").is_none());
        assert_eq!(table.position("2"), Some(1));
        assert_eq!(table.semester_ids().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn not_attempted_never_has_a_point() {
        let mut points = GradeTable::default_grade_points();
        points.insert(Grade::NotAttempted, 0.0);
        let table = sample_table().with_grade_points(points);
        assert_eq!(table.grade_point(Grade::NotAttempted), None);
        assert_eq!(table.grade_point(Grade::F), Some(0.0));
    }
}
