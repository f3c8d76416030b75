//! The `gpacalc semesters` command.

use std::path::Path;

use anyhow::Result;
use gpacalc_report::document::fmt_amount;

use crate::context::Session;

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let session = Session::open(config_path)?;

    let mut table = session.table();
    table.set_header(vec!["Semester", "Courses", "Credits"]);
    for semester in &session.calc.table().semesters {
        table.add_row(vec![
            semester.id.clone(),
            semester.courses.len().to_string(),
            fmt_amount(semester.total_credits()),
        ]);
    }

    println!("{table}");
    Ok(())
}
