//! The `gpacalc cgpa` commands.

use std::path::Path;

use anyhow::Result;
use gpacalc_core::statistics::performance_band;
use gpacalc_report::document::{fmt_amount, fmt_gpa};

use crate::context::Session;
use crate::CgpaAction;

pub fn execute(config_path: Option<&Path>, action: CgpaAction) -> Result<()> {
    let mut session = Session::open(config_path)?;

    match action {
        CgpaAction::Set { semester, gpa } => {
            require_semester(&session, &semester)?;
            if session.calc.set_cumulative_gpa(&semester, &gpa) {
                println!("Semester {semester}: {gpa}");
            } else {
                println!(
                    "Ignored '{gpa}' for semester {semester}: expected a digit with up to three decimals."
                );
            }
        }
        CgpaAction::Clear { semester } => {
            require_semester(&session, &semester)?;
            session.calc.set_cumulative_gpa(&semester, "");
            println!("Cleared semester {semester}.");
        }
        CgpaAction::Show => show(&session),
    }

    Ok(())
}

fn require_semester(session: &Session, semester: &str) -> Result<()> {
    if session.calc.table().semester(semester).is_none() {
        anyhow::bail!("unknown semester: {semester}");
    }
    Ok(())
}

fn show(session: &Session) {
    let stats = session.calc.cumulative_statistics();
    let entered = &session.calc.cumulative_record().gpas;

    let mut table = session.table();
    table.set_header(vec!["Semester", "Semester Credits", "GPA", "Points Secured"]);
    for semester in &session.calc.table().semesters {
        let row = stats.semesters.iter().find(|r| r.semester_id == semester.id);
        let (gpa, points) = match (row, entered.get(&semester.id)) {
            (Some(row), _) => (fmt_gpa(row.gpa), fmt_amount(row.points)),
            (None, Some(text)) => (format!("{text} (ignored)"), "-".to_string()),
            (None, None) => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            format!("Semester {}", semester.id),
            fmt_amount(semester.total_credits()),
            gpa,
            points,
        ]);
    }
    println!("{table}");

    println!("Total Credits Completed: {}", fmt_amount(stats.total_credits));
    println!("Total Points Secured:    {}", fmt_amount(stats.total_points));
    println!(
        "CGPA: {} ({})",
        fmt_gpa(stats.cgpa),
        performance_band(stats.cgpa).label()
    );
}
