//! gpacalc configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gpacalc configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpacalcConfig {
    /// Directory holding the persisted calculator records.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// TOML grade table to use instead of the built-in curriculum. A
    /// relative path is taken from the directory of the config file.
    #[serde(default)]
    pub grade_table: Option<PathBuf>,
    /// Subtitle printed on exported reports.
    #[serde(default = "default_department")]
    pub department: String,
    /// Where `export` writes when no output directory is given.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_state_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("gpacalc"),
        None => PathBuf::from(".gpacalc"),
    }
}
fn default_department() -> String {
    "Department of Electrical and Electronic Engineering".to_string()
}
fn default_report_dir() -> PathBuf {
    PathBuf::from("./gpacalc-reports")
}

impl Default for GpacalcConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            grade_table: None,
            department: default_department(),
            report_dir: default_report_dir(),
        }
    }
}

/// Expand `${VAR}` references using `lookup`. Unset variables expand to
/// nothing; an unterminated `${` is left as is.
fn resolve_env_vars(s: &str, lookup: &impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        result.push_str(&lookup(&rest[start + 2..start + len]).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path, lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy(), lookup))
}

impl GpacalcConfig {
    /// Expand `${VAR}` references, anchor a relative `grade_table` at
    /// `base`, then apply `GPACALC_STATE_DIR` and `GPACALC_GRADE_TABLE`.
    fn resolve(mut self, base: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.state_dir = resolve_path(&self.state_dir, &lookup);
        self.grade_table = self
            .grade_table
            .map(|p| base.join(resolve_path(&p, &lookup)));
        self.department = resolve_env_vars(&self.department, &lookup);
        self.report_dir = resolve_path(&self.report_dir, &lookup);

        if let Some(dir) = lookup("GPACALC_STATE_DIR").filter(|v| !v.is_empty()) {
            self.state_dir = PathBuf::from(dir);
        }
        if let Some(table) = lookup("GPACALC_GRADE_TABLE").filter(|v| !v.is_empty()) {
            self.grade_table = Some(PathBuf::from(table));
        }
        self
    }
}

/// Pick the config file to read, if any.
///
/// An explicit path must exist. Otherwise `gpacalc.toml` in `cwd` wins
/// over `{home}/.config/gpacalc/config.toml`.
fn find_config_file(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(p) = explicit {
        if p.exists() {
            return Ok(Some(p.to_path_buf()));
        }
        anyhow::bail!("config file not found: {}", p.display());
    }

    let local = cwd.join("gpacalc.toml");
    if local.exists() {
        return Ok(Some(local));
    }
    Ok(home
        .map(|h| h.join(".config").join("gpacalc").join("config.toml"))
        .filter(|p| p.exists()))
}

fn read_config(path: &Path) -> Result<GpacalcConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gpacalc.toml` in the current directory
/// 2. `~/.config/gpacalc/config.toml`
///
/// Environment variable overrides: `GPACALC_STATE_DIR`, `GPACALC_GRADE_TABLE`.
pub fn load_config_from(path: Option<&Path>) -> Result<GpacalcConfig> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let found = find_config_file(path, Path::new("."), home.as_deref())?;

    let (config, base) = match found {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (read_config(&path)?, base)
        }
        None => (GpacalcConfig::default(), PathBuf::new()),
    };
    Ok(config.resolve(&base, |name| std::env::var(name).ok()))
}
