//! Scraped job postings

use serde::{Deserialize, Serialize};

/// Placeholder for any posting field the source did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// One job posting as delivered by a scraper. Read-only to the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default = "not_available")]
    pub title: String,
    #[serde(default = "not_available", alias = "company")]
    pub company_name: String,
    #[serde(default = "not_available")]
    pub location: String,
    #[serde(default = "not_available")]
    pub job_type: String,
    #[serde(default = "not_available")]
    pub posted_time: String,
    #[serde(default = "not_available")]
    pub updated_time: String,
    #[serde(default = "not_available")]
    pub description: String,
    #[serde(default = "not_available")]
    pub apply_link: String,
    /// The search term that surfaced this posting.
    #[serde(default = "not_available")]
    pub role: String,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            title: not_available(),
            company_name: not_available(),
            location: not_available(),
            job_type: not_available(),
            posted_time: not_available(),
            updated_time: not_available(),
            description: not_available(),
            apply_link: not_available(),
            role: not_available(),
        }
    }
}

impl JobPosting {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company_name = company.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// True when `term` appears in the job type or the description, ignoring case.
    pub fn mentions(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.job_type.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
