//! Grade-point aggregation.
//!
//! Pure functions from the grade table plus one input slice to a statistics
//! value. Nothing here mutates its inputs, touches storage, or caches: the
//! inputs are tens of courses at most, so every read recomputes.
//!
//! | Condition | Policy |
//! |---|---|
//! | grade is N/A | counted in offered credits only |
//! | grade is F | attempted and points; not secured |
//! | cumulative GPA non-numeric or outside [0, 4] | excluded, not an error |
//! | unknown semester | zero-valued statistics |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::{parse_gpa, parse_gpa_in_range};
use crate::model::{Grade, GradeTable};
use crate::state::{CumulativeRecord, SemesterImprovement};

/// One course line of a semester or improvement breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRow {
    pub code: String,
    pub name: String,
    pub credits: f64,
    pub grade: Grade,
    /// `credits × grade point`, or `None` when the grade has no point.
    pub points: Option<f64>,
}

/// Derived figures for one semester's grade entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterStatistics {
    /// Credits of every listed course, graded or not.
    pub offered_credits: f64,
    /// Credits of courses with a grade other than N/A.
    pub attempted_credits: f64,
    /// Credits of attempted courses that were not failed.
    pub secured_credits: f64,
    /// Σ credits × grade point over attempted courses.
    pub points_secured: f64,
    /// Semester GPA; 0 when nothing is attempted.
    pub sgpa: f64,
    /// Per-course breakdown in curriculum order.
    pub courses: Vec<CourseRow>,
}

/// Compute statistics for the grades entered against one semester.
///
/// Unknown semesters yield the zero-valued default. Grade keys that are
/// not courses of the semester are ignored; courses without an entry
/// count as N/A.
pub fn compute_semester_statistics(
    table: &GradeTable,
    semester_id: &str,
    grades: &BTreeMap<String, Grade>,
) -> SemesterStatistics {
    let Some(semester) = table.semester(semester_id) else {
        return SemesterStatistics::default();
    };

    let mut stats = SemesterStatistics {
        offered_credits: semester.total_credits(),
        ..Default::default()
    };

    for course in &semester.courses {
        let grade = grades.get(&course.code).copied().unwrap_or_default();
        let points = table.grade_point(grade).map(|gp| gp * course.credits);

        if let Some(points) = points {
            stats.attempted_credits += course.credits;
            stats.points_secured += points;
            if !grade.is_failing() {
                stats.secured_credits += course.credits;
            }
        }

        stats.courses.push(CourseRow {
            code: course.code.clone(),
            name: course.name.clone(),
            credits: course.credits,
            grade,
            points,
        });
    }

    stats.sgpa = if stats.attempted_credits > 0.0 {
        stats.points_secured / stats.attempted_credits
    } else {
        0.0
    };

    stats
}

/// One semester that contributed to the cumulative figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeRow {
    pub semester_id: String,
    pub credits: f64,
    pub gpa: f64,
    pub points: f64,
}

/// Credit-weighted figures across semesters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeStatistics {
    pub total_points: f64,
    pub total_credits: f64,
    /// 0 when no semester contributes.
    pub cgpa: f64,
    /// Contributing semesters in curriculum order.
    pub semesters: Vec<CumulativeRow>,
}

/// Compute CGPA from per-semester GPA text.
///
/// Every semester present in the input is considered; those with missing,
/// non-numeric, or out-of-range GPA text, or without a positive credit
/// weight in the table, are skipped.
pub fn compute_cumulative_statistics(
    table: &GradeTable,
    input: &CumulativeRecord,
) -> CumulativeStatistics {
    let mut stats = CumulativeStatistics::default();

    for (semester_id, text) in &input.gpas {
        let Some(gpa) = parse_gpa_in_range(text) else {
            continue;
        };
        let credits = table.semester_credits(semester_id);
        if credits <= 0.0 {
            continue;
        }

        let points = gpa * credits;
        stats.total_points += points;
        stats.total_credits += credits;
        stats.semesters.push(CumulativeRow {
            semester_id: semester_id.clone(),
            credits,
            gpa,
            points,
        });
    }

    stats
        .semesters
        .sort_by_key(|row| table.position(&row.semester_id));

    stats.cgpa = if stats.total_credits > 0.0 {
        stats.total_points / stats.total_credits
    } else {
        0.0
    };

    stats
}

/// Projected figures after retaking selected courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementStatistics {
    pub total_semester_credits: f64,
    /// current GPA × total semester credits.
    pub current_secured_points: f64,
    /// Σ credits × new grade point over selected courses with a point.
    pub improved_course_points: f64,
    pub updated_secured_points: f64,
    pub updated_gpa: f64,
    /// Credits of every selected course, including those still at N/A.
    pub improved_credits_count: f64,
    /// Selected courses in curriculum order.
    pub courses: Vec<CourseRow>,
}

/// Compute an improvement projection for one semester.
///
/// `improved_credits_count` includes selected courses whose new grade is
/// still N/A, although those add no points.
pub fn compute_improvement_statistics(
    table: &GradeTable,
    semester_id: &str,
    input: &SemesterImprovement,
) -> ImprovementStatistics {
    let Some(semester) = table.semester(semester_id) else {
        return ImprovementStatistics::default();
    };
    let total = semester.total_credits();

    let mut stats = ImprovementStatistics {
        total_semester_credits: total,
        ..Default::default()
    };

    if total > 0.0 {
        if let Some(gpa) = parse_gpa(&input.current_gpa) {
            stats.current_secured_points = gpa * total;
        }
    }

    for course in &semester.courses {
        let Some(&grade) = input.selected_courses.get(&course.code) else {
            continue;
        };
        let points = table.grade_point(grade).map(|gp| gp * course.credits);

        stats.improved_credits_count += course.credits;
        if let Some(points) = points {
            stats.improved_course_points += points;
        }

        stats.courses.push(CourseRow {
            code: course.code.clone(),
            name: course.name.clone(),
            credits: course.credits,
            grade,
            points,
        });
    }

    stats.updated_secured_points = stats.current_secured_points + stats.improved_course_points;
    stats.updated_gpa = if total > 0.0 {
        stats.updated_secured_points / total
    } else {
        0.0
    };

    stats
}

/// Display band of a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Excellent,
    VeryGood,
    Good,
    Pass,
    NoResult,
}

impl PerformanceBand {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "Excellent",
            PerformanceBand::VeryGood => "Very good",
            PerformanceBand::Good => "Good",
            PerformanceBand::Pass => "Pass",
            PerformanceBand::NoResult => "No result",
        }
    }
}

pub fn performance_band(gpa: f64) -> PerformanceBand {
    if gpa >= 3.75 {
        PerformanceBand::Excellent
    } else if gpa >= 3.25 {
        PerformanceBand::VeryGood
    } else if gpa >= 2.5 {
        PerformanceBand::Good
    } else if gpa > 0.0 {
        PerformanceBand::Pass
    } else {
        PerformanceBand::NoResult
    }
}
