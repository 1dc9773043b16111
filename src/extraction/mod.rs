//! Heuristic field extraction from plain résumé text
//!
//! Every extractor is a pure function of the text. Each one tries an ordered
//! list of strategies and falls back to a sentinel value, so extraction never
//! fails and never returns an empty field.

pub mod catalog;
pub mod contact;
pub mod history;
pub mod profile;
pub mod sections;
pub mod skills;

pub use contact::{extract_email, extract_location, extract_name, extract_phone};
pub use history::{extract_employment_history, extract_experience, extract_profile_summary};
pub use profile::ParsedProfile;
pub use skills::{extract_languages, extract_qualifications, extract_skills};

use log::debug;

/// One way of reading a field out of the text.
pub type Strategy<T> = fn(&str) -> Option<T>;

/// Result of the first strategy that finds something.
pub fn first_hit<T>(text: &str, strategies: &[Strategy<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(text))
}

/// Runs every field extractor over the résumé text.
pub fn parse_resume(text: &str) -> ParsedProfile {
    let profile = ParsedProfile {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        location: extract_location(text),
        skills: extract_skills(text),
        languages: extract_languages(text),
        experience: extract_experience(text),
        qualifications: extract_qualifications(text),
        employment_history: extract_employment_history(text),
        profile_summary: extract_profile_summary(text),
        career_goals: None,
        preferred_location: None,
        preferred_salary: None,
    };

    debug!(
        "Parsed resume for {}: {} skills, {} employment entries",
        profile.name,
        profile.skills.len(),
        profile.employment_history.len()
    );

    profile
}
