//! Calculator session.
//!
//! Owns the grade table and the three input slices for one user. Every
//! update operation touches exactly one slice, commits it in memory, and
//! then persists that slice. Reads recompute statistics from the current
//! slices every time.

use crate::input::validate_gpa_text;
use crate::model::{Course, Grade, GradeTable};
use crate::report::{CumulativeReport, ImprovementReport, Report, SemesterReport};
use crate::state::{CumulativeRecord, GradeSelection, ImprovementRecord, SemesterImprovement, Theme};
use crate::statistics::{
    compute_cumulative_statistics, compute_improvement_statistics, compute_semester_statistics,
    CumulativeStatistics, ImprovementStatistics, SemesterStatistics,
};
use crate::store::StateStore;
use crate::traits::KeyValueStore;

/// A calculator session backed by persistent storage.
pub struct Calculator<S: KeyValueStore> {
    table: GradeTable,
    store: StateStore<S>,
    grades: GradeSelection,
    cumulative: CumulativeRecord,
    improvement: ImprovementRecord,
}

impl<S: KeyValueStore> Calculator<S> {
    /// Load the saved slices and start a session.
    ///
    /// Grade entries left over for courses outside the saved semester are
    /// dropped, and the cleaned record is written back.
    pub fn open(table: GradeTable, backend: S) -> Self {
        let mut store = StateStore::new(backend);
        let mut grades: GradeSelection = store.load();
        let cumulative = store.load();
        let improvement = store.load();

        let before = grades.grades.len();
        grades
            .grades
            .retain(|code, _| table.course(&grades.selected_semester_key, code).is_some());
        if grades.grades.len() != before {
            tracing::debug!(
                dropped = before - grades.grades.len(),
                "dropped grades for courses outside semester '{}'",
                grades.selected_semester_key
            );
            store.save(&grades);
        }

        Self {
            table,
            store,
            grades,
            cumulative,
            improvement,
        }
    }

    pub fn table(&self) -> &GradeTable {
        &self.table
    }

    pub fn grade_selection(&self) -> &GradeSelection {
        &self.grades
    }

    pub fn cumulative_record(&self) -> &CumulativeRecord {
        &self.cumulative
    }

    pub fn improvement_record(&self) -> &ImprovementRecord {
        &self.improvement
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Semester GPA
    // -----------------------------------------------------------------------

    /// Select the semester whose grades are being entered.
    ///
    /// Switching to a different semester discards the grades entered for
    /// the previous one. Re-selecting the current semester does nothing.
    pub fn set_semester_selection(&mut self, semester_id: &str) {
        if self.grades.selected_semester_key == semester_id {
            return;
        }
        self.grades = GradeSelection {
            selected_semester_key: semester_id.to_string(),
            ..Default::default()
        };
        self.store.save(&self.grades);
    }

    /// Record a grade for a course of the selected semester.
    ///
    /// Returns `false` without changing anything if the course is not part
    /// of the selected semester.
    pub fn set_grade_for_course(&mut self, code: &str, grade: Grade) -> bool {
        if self
            .table
            .course(&self.grades.selected_semester_key, code)
            .is_none()
        {
            tracing::debug!("ignoring grade for unknown course '{code}'");
            return false;
        }
        self.grades.grades.insert(code.to_string(), grade);
        self.store.save(&self.grades);
        true
    }

    pub fn semester_statistics(&self) -> SemesterStatistics {
        compute_semester_statistics(
            &self.table,
            &self.grades.selected_semester_key,
            &self.grades.grades,
        )
    }

    // -----------------------------------------------------------------------
    // Cumulative GPA
    // -----------------------------------------------------------------------

    /// Set the GPA text of a semester for the cumulative view.
    ///
    /// Text that fails [`validate_gpa_text`] is rejected and the stored
    /// value is left as it was. Empty text clears the entry. Returns
    /// whether the text was committed.
    pub fn set_cumulative_gpa(&mut self, semester_id: &str, text: &str) -> bool {
        if self.table.semester(semester_id).is_none() {
            tracing::debug!("ignoring GPA for unknown semester '{semester_id}'");
            return false;
        }
        if !validate_gpa_text(text) {
            tracing::debug!("rejected GPA text {text:?} for semester '{semester_id}'");
            return false;
        }
        if text.is_empty() {
            self.cumulative.gpas.remove(semester_id);
        } else {
            self.cumulative
                .gpas
                .insert(semester_id.to_string(), text.to_string());
        }
        self.store.save(&self.cumulative);
        true
    }

    pub fn cumulative_statistics(&self) -> CumulativeStatistics {
        compute_cumulative_statistics(&self.table, &self.cumulative)
    }

    // -----------------------------------------------------------------------
    // Improvement
    // -----------------------------------------------------------------------

    /// Select the semester being projected. Inputs entered for other
    /// semesters are kept.
    pub fn set_improvement_semester(&mut self, semester_id: &str) {
        if self.improvement.selected_semester_key == semester_id {
            return;
        }
        self.improvement.selected_semester_key = semester_id.to_string();
        self.store.save(&self.improvement);
    }

    /// Set the GPA the selected semester was completed with.
    ///
    /// Same acceptance rules as [`Self::set_cumulative_gpa`]; also rejected
    /// while no semester is selected.
    pub fn set_improvement_current_gpa(&mut self, text: &str) -> bool {
        if self.improvement.selected_semester_key.is_empty() || !validate_gpa_text(text) {
            tracing::debug!("rejected current GPA text {text:?}");
            return false;
        }
        self.current_improvement_mut().current_gpa = text.to_string();
        self.store.save(&self.improvement);
        true
    }

    /// Add a course of the selected semester to the projection, starting
    /// at N/A. Returns `false` if it is unknown or already added.
    pub fn add_improvement_course(&mut self, code: &str) -> bool {
        let semester_id = self.improvement.selected_semester_key.clone();
        if self.table.course(&semester_id, code).is_none() {
            tracing::debug!("ignoring unknown course '{code}' for semester '{semester_id}'");
            return false;
        }
        let current = self.current_improvement_mut();
        if current.selected_courses.contains_key(code) {
            return false;
        }
        current
            .selected_courses
            .insert(code.to_string(), Grade::NotAttempted);
        self.store.save(&self.improvement);
        true
    }

    /// Drop a course from the projection. Returns `false` if it was not added.
    pub fn remove_improvement_course(&mut self, code: &str) -> bool {
        let removed = self
            .improvement
            .semester_data
            .get_mut(&self.improvement.selected_semester_key)
            .and_then(|data| data.selected_courses.remove(code))
            .is_some();
        if removed {
            self.store.save(&self.improvement);
        }
        removed
    }

    /// Set the expected grade of a course already added to the projection.
    pub fn set_improvement_course_grade(&mut self, code: &str, grade: Grade) -> bool {
        let Some(slot) = self
            .improvement
            .semester_data
            .get_mut(&self.improvement.selected_semester_key)
            .and_then(|data| data.selected_courses.get_mut(code))
        else {
            tracing::debug!("course '{code}' has not been added to the projection");
            return false;
        };
        *slot = grade;
        self.store.save(&self.improvement);
        true
    }

    /// Courses of the selected semester not yet added to the projection.
    pub fn available_improvement_courses(&self) -> Vec<&Course> {
        let current = self
            .improvement
            .semester_data
            .get(&self.improvement.selected_semester_key);
        self.table
            .courses(&self.improvement.selected_semester_key)
            .iter()
            .filter(|c| current.map_or(true, |data| !data.selected_courses.contains_key(&c.code)))
            .collect()
    }

    pub fn improvement_statistics(&self) -> ImprovementStatistics {
        compute_improvement_statistics(
            &self.table,
            &self.improvement.selected_semester_key,
            &self.improvement.current(),
        )
    }

    fn current_improvement_mut(&mut self) -> &mut SemesterImprovement {
        self.improvement
            .semester_data
            .entry(self.improvement.selected_semester_key.clone())
            .or_default()
    }

    // -----------------------------------------------------------------------
    // Session-wide
    // -----------------------------------------------------------------------

    /// Reset all three slices, in memory and in storage.
    pub fn clear_all(&mut self) {
        self.grades = GradeSelection::default();
        self.cumulative = CumulativeRecord::default();
        self.improvement = ImprovementRecord::default();
        self.store.clear_all();
    }

    pub fn theme(&self) -> Theme {
        self.store.load_theme()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.store.save_theme(theme);
    }

    /// Report for the semester view, or `None` while nothing is attempted.
    pub fn semester_report(&self, department: &str) -> Option<Report> {
        SemesterReport::build(
            &self.grades.selected_semester_key,
            self.semester_statistics(),
            department,
        )
        .map(Report::Semester)
    }

    /// Report for the cumulative view, or `None` while no semester counts.
    pub fn cumulative_report(&self, department: &str) -> Option<Report> {
        CumulativeReport::build(self.cumulative_statistics(), department).map(Report::Cumulative)
    }

    /// Report for the improvement view, or `None` without a semester.
    pub fn improvement_report(&self, department: &str) -> Option<Report> {
        ImprovementReport::build(
            &self.improvement.selected_semester_key,
            &self.improvement.current().current_gpa,
            self.improvement_statistics(),
            department,
        )
        .map(Report::Improvement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Semester;
    use crate::state::Slice;
    use crate::traits::MemoryStore;

    fn table() -> GradeTable {
        GradeTable::new(vec![
            Semester::new(
                "1",
                vec![
                    Course::new("A", "Course A", 3.0),
                    Course::new("B", "Course B", 2.0),
                ],
            ),
            Semester::new(
                "2",
                vec![
                    Course::new("C", "Course C", 3.0),
                    Course::new("D", "Course D", 3.0),
                ],
            ),
        ])
    }

    fn calculator() -> Calculator<MemoryStore> {
        Calculator::open(table(), MemoryStore::new())
    }

    fn reopen(calc: Calculator<MemoryStore>) -> Calculator<MemoryStore> {
        Calculator::open(table(), calc.store.into_inner())
    }

    #[test]
    fn grades_persist_across_sessions() {
        let mut calc = calculator();
        calc.set_semester_selection("1");
        assert!(calc.set_grade_for_course("A", Grade::A));
        assert!(calc.set_grade_for_course("B", Grade::F));

        let calc = reopen(calc);
        let stats = calc.semester_statistics();
        assert!((stats.sgpa - 2.25).abs() < 1e-9);
        assert!((stats.secured_credits - 3.0).abs() < 1e-9);
    }

    #[test]
    fn switching_semesters_drops_previous_grades() {
        let mut calc = calculator();
        calc.set_semester_selection("1");
        calc.set_grade_for_course("A", Grade::APlus);
        calc.set_semester_selection("2");
        assert!(calc.grade_selection().grades.is_empty());

        calc.set_semester_selection("1");
        assert!(calc.grade_selection().grades.is_empty());
        assert_eq!(calc.semester_statistics().attempted_credits, 0.0);
    }

    #[test]
    fn reselecting_the_same_semester_keeps_grades() {
        let mut calc = calculator();
        calc.set_semester_selection("1");
        calc.set_grade_for_course("A", Grade::APlus);
        calc.set_semester_selection("1");
        assert_eq!(calc.grade_selection().grades.len(), 1);
    }

    #[test]
    fn grades_for_other_semesters_are_refused() {
        let mut calc = calculator();
        calc.set_semester_selection("1");
        assert!(!calc.set_grade_for_course("C", Grade::A));
        assert!(calc.grade_selection().grades.is_empty());
    }

    #[test]
    fn stale_grades_are_pruned_on_open() {
        let mut backend = MemoryStore::new();
        backend.insert_raw(
            GradeSelection::KEY,
            r#"{"selectedSemesterKey":"1","grades":{"A":"A","C":"B"}}"#,
        );
        let calc = Calculator::open(table(), backend);
        assert_eq!(calc.grade_selection().grades.len(), 1);
        assert!(calc.grade_selection().grades.contains_key("A"));

        let saved = calc.store().backend().raw(GradeSelection::KEY).unwrap();
        assert!(!saved.contains("\"C\""));
        let reopened = Calculator::open(table(), calc.store.into_inner());
        let grades: Vec<&str> = reopened
            .grade_selection()
            .grades
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(grades, vec!["A"]);
    }

    #[test]
    fn clean_records_are_not_rewritten_on_open() {
        let mut backend = MemoryStore::new();
        let raw = r#"{"selectedSemesterKey":"1","grades":{"A":"A"}}"#;
        backend.insert_raw(GradeSelection::KEY, raw);
        let calc = Calculator::open(table(), backend);
        assert_eq!(calc.store().backend().raw(GradeSelection::KEY), Some(raw));
    }

    #[test]
    fn unknown_semester_selection_degrades_to_zero() {
        let mut calc = calculator();
        calc.set_semester_selection("9");
        assert_eq!(calc.semester_statistics(), SemesterStatistics::default());
        assert!(calc.semester_report("Dept").is_none());
    }

    #[test]
    fn cumulative_gate_rejects_bad_keystrokes() {
        let mut calc = calculator();
        assert!(calc.set_cumulative_gpa("1", "3."));
        assert!(calc.set_cumulative_gpa("1", "3.5"));
        assert!(!calc.set_cumulative_gpa("1", "3.5a"));
        assert!(!calc.set_cumulative_gpa("1", "35"));
        assert_eq!(calc.cumulative_record().gpas.get("1").unwrap(), "3.5");
        assert!(!calc.set_cumulative_gpa("7", "3.0"));

        assert!(calc.set_cumulative_gpa("2", "5.0"));
        let stats = calc.cumulative_statistics();
        assert!((stats.total_credits - 5.0).abs() < 1e-9);
        assert!((stats.cgpa - 3.5).abs() < 1e-9);

        assert!(calc.set_cumulative_gpa("1", ""));
        assert!(!calc.cumulative_record().gpas.contains_key("1"));
        assert_eq!(calc.cumulative_statistics().cgpa, 0.0);
    }

    #[test]
    fn improvement_flow() {
        let mut calc = calculator();
        assert!(!calc.set_improvement_current_gpa("2.5"));

        calc.set_improvement_semester("2");
        assert!(calc.set_improvement_current_gpa("2.50"));
        assert!(calc.add_improvement_course("C"));
        assert!(!calc.add_improvement_course("C"));
        assert!(!calc.add_improvement_course("A"));

        let names: Vec<&str> = calc
            .available_improvement_courses()
            .into_iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(names, vec!["D"]);

        let stats = calc.improvement_statistics();
        assert!((stats.improved_credits_count - 3.0).abs() < 1e-9);
        assert_eq!(stats.improved_course_points, 0.0);

        assert!(calc.set_improvement_course_grade("C", Grade::APlus));
        assert!(!calc.set_improvement_course_grade("D", Grade::APlus));
        let stats = calc.improvement_statistics();
        // 2.5 × 6 + 3 × 4
        assert!((stats.updated_secured_points - 27.0).abs() < 1e-9);
        assert!((stats.updated_gpa - 4.5).abs() < 1e-9);

        assert!(calc.remove_improvement_course("C"));
        assert!(!calc.remove_improvement_course("C"));
        assert_eq!(calc.available_improvement_courses().len(), 2);
    }

    #[test]
    fn improvement_gate_rejects_bad_keystrokes() {
        let mut calc = calculator();
        calc.set_improvement_semester("1");
        assert!(calc.set_improvement_current_gpa("2.5"));
        assert!(!calc.set_improvement_current_gpa("2.5x"));
        assert!(!calc.set_improvement_current_gpa("35"));
        assert!(!calc.set_improvement_current_gpa("2.5555"));
        assert_eq!(calc.improvement_record().current().current_gpa, "2.5");

        let calc = reopen(calc);
        assert_eq!(calc.improvement_record().current().current_gpa, "2.5");
        // 2.5 × 5
        assert!((calc.improvement_statistics().current_secured_points - 12.5).abs() < 1e-9);
    }

    #[test]
    fn improvement_data_survives_semester_switches() {
        let mut calc = calculator();
        calc.set_improvement_semester("1");
        calc.set_improvement_current_gpa("3.0");
        calc.add_improvement_course("A");
        calc.set_improvement_semester("2");
        assert_eq!(calc.improvement_record().current(), SemesterImprovement::default());

        calc.set_improvement_semester("1");
        let calc = reopen(calc);
        let current = calc.improvement_record().current();
        assert_eq!(current.current_gpa, "3.0");
        assert!(current.selected_courses.contains_key("A"));
    }

    #[test]
    fn clear_all_resets_memory_and_storage() {
        let mut calc = calculator();
        calc.set_semester_selection("1");
        calc.set_grade_for_course("A", Grade::A);
        calc.set_cumulative_gpa("1", "3.2");
        calc.set_improvement_semester("2");

        calc.clear_all();
        calc.clear_all();
        assert_eq!(calc.grade_selection(), &GradeSelection::default());
        assert_eq!(calc.cumulative_record(), &CumulativeRecord::default());
        assert_eq!(calc.improvement_record(), &ImprovementRecord::default());

        let calc = reopen(calc);
        assert_eq!(calc.grade_selection(), &GradeSelection::default());
        assert_eq!(calc.cumulative_record(), &CumulativeRecord::default());
        assert_eq!(calc.improvement_record(), &ImprovementRecord::default());
    }

    #[test]
    fn memory_state_stays_authoritative_when_writes_fail() {
        let mut calc = Calculator::open(table(), MemoryStore::with_quota(0));
        calc.set_semester_selection("1");
        assert!(calc.set_grade_for_course("A", Grade::APlus));
        assert!((calc.semester_statistics().sgpa - 4.0).abs() < 1e-9);
        assert!(calc.store().backend().is_empty());
    }

    #[test]
    fn reports_are_only_built_with_data() {
        let mut calc = calculator();
        assert!(calc.semester_report("Dept").is_none());
        assert!(calc.cumulative_report("Dept").is_none());
        assert!(calc.improvement_report("Dept").is_none());

        calc.set_semester_selection("1");
        calc.set_grade_for_course("A", Grade::B);
        calc.set_cumulative_gpa("1", "3.0");
        calc.set_improvement_semester("1");
        assert!(calc.semester_report("Dept").is_some());
        assert!(calc.cumulative_report("Dept").is_some());
        assert!(calc.improvement_report("Dept").is_some());
    }

    #[test]
    fn theme_roundtrip() {
        let mut calc = calculator();
        assert_eq!(calc.theme(), Theme::Light);
        calc.set_theme(Theme::Dark);
        assert_eq!(reopen(calc).theme(), Theme::Dark);
    }
}
