//! The parsed résumé profile and its sentinel values

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NOT_FOUND: &str = "Not Found";
pub const LOCATION_NOT_FOUND: &str = "Location Not Found";
pub const EXPERIENCE_NOT_FOUND: &str = "Experience not found";
pub const EMPLOYMENT_NOT_FOUND: &str = "Employment history not found";
pub const EMPLOYMENT_UNPARSED: &str = "Could not parse employment details";
pub const SUMMARY_NOT_FOUND: &str = "Profile summary not found";

/// Structured facts extracted from one résumé.
///
/// Produced once per résumé. The only later changes are the user-entered
/// preferences added through the `with_*` builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub skills: BTreeSet<String>,
    pub languages: Vec<String>,
    pub experience: String,
    pub qualifications: BTreeSet<String>,
    pub employment_history: Vec<String>,
    pub profile_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_salary: Option<String>,
}

impl ParsedProfile {
    pub fn with_career_goals(mut self, goals: impl Into<String>) -> Self {
        self.career_goals = Some(goals.into());
        self
    }

    pub fn with_preferred_location(mut self, location: impl Into<String>) -> Self {
        self.preferred_location = Some(location.into());
        self
    }

    pub fn with_preferred_salary(mut self, salary: impl Into<String>) -> Self {
        self.preferred_salary = Some(salary.into());
        self
    }

    /// Career goals text, or an empty string when none were entered.
    pub fn career_goals_text(&self) -> &str {
        self.career_goals.as_deref().unwrap_or("")
    }
}

impl Default for ParsedProfile {
    /// A profile with every field at its sentinel.
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            location: LOCATION_NOT_FOUND.to_string(),
            skills: BTreeSet::new(),
            languages: vec![NOT_FOUND.to_string()],
            experience: EXPERIENCE_NOT_FOUND.to_string(),
            qualifications: BTreeSet::from([NOT_FOUND.to_string()]),
            employment_history: vec![EMPLOYMENT_NOT_FOUND.to_string()],
            profile_summary: SUMMARY_NOT_FOUND.to_string(),
            career_goals: None,
            preferred_location: None,
            preferred_salary: None,
        }
    }
}
