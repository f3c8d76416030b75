//! The `gpacalc improve` commands.

use std::path::Path;

use anyhow::Result;
use gpacalc_core::statistics::performance_band;
use gpacalc_report::document::{fmt_amount, fmt_gpa};

use crate::context::Session;
use crate::ImproveAction;

pub fn execute(config_path: Option<&Path>, action: ImproveAction) -> Result<()> {
    let mut session = Session::open(config_path)?;

    match action {
        ImproveAction::Select { semester } => {
            if session.calc.table().semester(&semester).is_none() {
                println!("Note: semester {semester} is not in the grade table.");
            }
            session.calc.set_improvement_semester(&semester);
            println!("Selected semester {semester}.");
        }
        ImproveAction::Gpa { gpa } => {
            let semester = selected(&session)?;
            if session.calc.set_improvement_current_gpa(&gpa) {
                println!("Semester {semester} current GPA: {gpa}");
            } else {
                println!("Ignored '{gpa}': expected a digit with up to three decimals.");
            }
        }
        ImproveAction::Add { course } => {
            let semester = selected(&session)?;
            if session.calc.add_improvement_course(&course) {
                println!("Added {course}.");
            } else if session.calc.table().course(&semester, &course).is_none() {
                anyhow::bail!("course '{course}' is not part of semester {semester}");
            } else {
                println!("{course} is already in the projection.");
            }
        }
        ImproveAction::Remove { course } => {
            selected(&session)?;
            if session.calc.remove_improvement_course(&course) {
                println!("Removed {course}.");
            } else {
                println!("{course} is not in the projection.");
            }
        }
        ImproveAction::Grade { course, grade } => {
            selected(&session)?;
            if !session.calc.set_improvement_course_grade(&course, grade) {
                anyhow::bail!("course '{course}' is not in the projection; add it first");
            }
            println!("{course}: {grade}");
        }
        ImproveAction::Show => show(&session),
    }

    Ok(())
}

fn selected(session: &Session) -> Result<String> {
    let semester = &session.calc.improvement_record().selected_semester_key;
    if semester.is_empty() {
        anyhow::bail!("no semester selected; run `gpacalc improve select <ID>` first");
    }
    Ok(semester.clone())
}

fn show(session: &Session) {
    let record = session.calc.improvement_record();
    if record.selected_semester_key.is_empty() {
        println!("No semester selected. Run `gpacalc improve select <ID>`.");
        return;
    }
    let current = record.current();
    let stats = session.calc.improvement_statistics();

    println!(
        "Semester {} | Current GPA: {}",
        record.selected_semester_key,
        if current.current_gpa.is_empty() {
            "-"
        } else {
            current.current_gpa.as_str()
        }
    );

    let mut table = session.table();
    table.set_header(vec!["Course Code", "Course Name", "Credits", "New Grade", "Points"]);
    for row in &stats.courses {
        table.add_row(vec![
            row.code.clone(),
            row.name.clone(),
            fmt_amount(row.credits),
            row.grade.to_string(),
            row.points.map(fmt_amount).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");

    let available: Vec<&str> = session
        .calc
        .available_improvement_courses()
        .into_iter()
        .map(|c| c.code.as_str())
        .collect();
    if !available.is_empty() {
        println!("Available to add: {}", available.join(", "));
    }

    println!("Semester Credits:        {}", fmt_amount(stats.total_semester_credits));
    println!("Current Points:          {}", fmt_amount(stats.current_secured_points));
    println!("Improved Course Credits: {}", fmt_amount(stats.improved_credits_count));
    println!("Improved Course Points:  {}", fmt_amount(stats.improved_course_points));
    println!("Updated Points:          {}", fmt_amount(stats.updated_secured_points));
    println!(
        "Updated GPA: {} ({})",
        fmt_gpa(stats.updated_gpa),
        performance_band(stats.updated_gpa).label()
    );
}
