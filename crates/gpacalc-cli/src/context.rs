//! Session setup shared by the commands.

use std::path::Path;

use anyhow::Result;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;

use gpacalc_core::parser::parse_grade_table;
use gpacalc_core::state::Theme;
use gpacalc_core::{Calculator, GradeTable};
use gpacalc_store::{load_config_from, FileStore, GpacalcConfig};

/// A calculator session opened from configuration.
pub struct Session {
    pub config: GpacalcConfig,
    pub calc: Calculator<FileStore>,
}

impl Session {
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let config = load_config_from(config_path)?;
        let table = load_table(&config)?;
        tracing::debug!("state directory: {}", config.state_dir.display());
        let calc = Calculator::open(table, FileStore::new(&config.state_dir));
        Ok(Self { config, calc })
    }

    /// An empty output table styled after the saved theme.
    pub fn table(&self) -> Table {
        styled_table(self.calc.theme())
    }
}

fn load_table(config: &GpacalcConfig) -> Result<GradeTable> {
    match &config.grade_table {
        Some(path) => parse_grade_table(path),
        None => Ok(GradeTable::builtin()),
    }
}

pub fn styled_table(theme: Theme) -> Table {
    let mut table = Table::new();
    match theme {
        Theme::Dark => table.load_preset(UTF8_FULL),
        Theme::Light => table.load_preset(ASCII_FULL),
    };
    table
}
