//! The `gpacalc init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("gpacalc.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("grade-table.toml"), SAMPLE_GRADE_TABLE)?;

    println!("\nNext steps:");
    println!("  1. Edit grade-table.toml with your curriculum");
    println!("  2. Run: gpacalc validate --grade-table grade-table.toml");
    println!("  3. Uncomment grade_table in gpacalc.toml");
    println!("  4. Run: gpacalc semesters");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gpacalc configuration

# Where entered grades and GPAs are kept between runs.
# state_dir = "${HOME}/.local/share/gpacalc"

# Curriculum to use instead of the built-in one.
# grade_table = "grade-table.toml"

department = "Department of Electrical and Electronic Engineering"
report_dir = "./gpacalc-reports"
"#;

const SAMPLE_GRADE_TABLE: &str = r#"# Grade points; symbols not listed keep the standard value.
[grade_points]
"A+" = 4.00
"A" = 3.75
"A-" = 3.50
"B+" = 3.25
"B" = 3.00
"B-" = 2.75
"C+" = 2.50
"C" = 2.25
"D" = 2.00
"F" = 0.00

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

[[semesters.courses]]
code = "MATH 101"
name = "Differential and Integral Calculus"
credits = 3.0

[[semesters]]
id = "2"

[[semesters.courses]]
code = "EEE 121"
name = "Electrical Circuits II"
credits = 3.0

[[semesters.courses]]
code = "EEE 122"
name = "Electrical Circuits II Sessional"
credits = 1.5
"#;
