//! The `gpacalc clear-all` command.

use std::path::Path;

use anyhow::Result;

use crate::context::Session;

pub fn execute(config_path: Option<&Path>, yes: bool) -> Result<()> {
    if !yes {
        println!("This resets every entered grade, GPA, and improvement projection.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut session = Session::open(config_path)?;
    session.calc.clear_all();
    tracing::info!("cleared all calculator data");
    println!("All calculator data cleared.");
    Ok(())
}
