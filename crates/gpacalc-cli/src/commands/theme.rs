//! The `gpacalc theme` command.

use std::path::Path;

use anyhow::Result;
use gpacalc_core::state::Theme;

use crate::context::Session;

pub fn execute(config_path: Option<&Path>, theme: Option<Theme>) -> Result<()> {
    let mut session = Session::open(config_path)?;
    match theme {
        Some(theme) => {
            session.calc.set_theme(theme);
            println!("Theme set to {theme}.");
        }
        None => println!("{}", session.calc.theme()),
    }
    Ok(())
}
