//! The `gpacalc sgpa` commands.

use std::path::Path;

use anyhow::Result;
use gpacalc_core::statistics::performance_band;
use gpacalc_report::document::{fmt_amount, fmt_gpa};

use crate::context::Session;
use crate::SgpaAction;

pub fn execute(config_path: Option<&Path>, action: SgpaAction) -> Result<()> {
    let mut session = Session::open(config_path)?;

    match action {
        SgpaAction::Select { semester } => {
            if session.calc.table().semester(&semester).is_none() {
                println!("Note: semester {semester} is not in the grade table.");
            }
            session.calc.set_semester_selection(&semester);
            println!("Selected semester {semester}.");
        }
        SgpaAction::Grade { course, grade } => {
            let semester = session.calc.grade_selection().selected_semester_key.clone();
            if semester.is_empty() {
                anyhow::bail!("no semester selected; run `gpacalc sgpa select <ID>` first");
            }
            if !session.calc.set_grade_for_course(&course, grade) {
                anyhow::bail!("course '{course}' is not part of semester {semester}");
            }
            println!("{course}: {grade}");
        }
        SgpaAction::Show => show(&session),
    }

    Ok(())
}

fn show(session: &Session) {
    let semester = &session.calc.grade_selection().selected_semester_key;
    if semester.is_empty() {
        println!("No semester selected. Run `gpacalc sgpa select <ID>`.");
        return;
    }

    let stats = session.calc.semester_statistics();
    println!("Semester {semester}");

    let mut table = session.table();
    table.set_header(vec!["Course Code", "Course Name", "Credits", "Grade", "Points"]);
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

    println!("Credit Offered:   {}", fmt_amount(stats.offered_credits));
    println!("Credit Attempted: {}", fmt_amount(stats.attempted_credits));
    println!("Credit Secured:   {}", fmt_amount(stats.secured_credits));
    println!("Points Secured:   {}", fmt_amount(stats.points_secured));
    println!(
        "GPA: {} ({})",
        fmt_gpa(stats.sgpa),
        performance_band(stats.sgpa).label()
    );
}
