//! The `gpacalc validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(grade_table_path: PathBuf) -> Result<()> {
    let table = gpacalc_core::parser::parse_grade_table(&grade_table_path)?;
    let course_count: usize = table.semesters.iter().map(|s| s.courses.len()).sum();
    println!(
        "Grade table: {} semesters, {} courses",
        table.semesters.len(),
        course_count
    );

    let warnings = gpacalc_core::parser::validate_grade_table(&table);
    for w in &warnings {
        let prefix = w
            .semester_id
            .as_ref()
            .map(|id| format!("  [semester {id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Grade table valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
