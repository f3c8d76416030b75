//! Persisted input slices.
//!
//! Each slice is stored as its own JSON record under a fixed key and is
//! independently meaningful: losing one never invalidates another.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::Grade;

/// A persisted record with a fixed storage key and an empty default.
pub trait Slice: Serialize + DeserializeOwned + Default {
    /// Storage key of the record.
    const KEY: &'static str;
}

/// Grades entered for the selected semester.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSelection {
    /// Selected semester; empty until the user picks one.
    #[serde(default)]
    pub selected_semester_key: String,
    /// Course code → grade, only for courses of the selected semester.
    #[serde(default)]
    pub grades: BTreeMap<String, Grade>,
}

impl Slice for GradeSelection {
    const KEY: &'static str = "sgpaState";
}

/// GPA text entered per semester for the cumulative view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeRecord {
    #[serde(default)]
    pub gpas: BTreeMap<String, String>,
}

impl Slice for CumulativeRecord {
    const KEY: &'static str = "cgpaState";
}

/// Improvement inputs for one semester.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterImprovement {
    /// GPA text the semester was originally completed with.
    #[serde(default)]
    pub current_gpa: String,
    /// Course code → grade expected after retaking it.
    #[serde(default)]
    pub selected_courses: BTreeMap<String, Grade>,
}

/// Improvement inputs for every semester the user has visited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRecord {
    #[serde(default)]
    pub selected_semester_key: String,
    #[serde(default)]
    pub semester_data: BTreeMap<String, SemesterImprovement>,
}

impl ImprovementRecord {
    /// Inputs of the selected semester, or an empty entry.
    pub fn current(&self) -> SemesterImprovement {
        self.semester_data
            .get(&self.selected_semester_key)
            .cloned()
            .unwrap_or_default()
    }
}

impl Slice for ImprovementRecord {
    const KEY: &'static str = "improvementState";
}

/// Presentation preference, stored apart from the calculator slices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Slice for Theme {
    const KEY: &'static str = "theme";
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}
