//! Keyword mining from free-text career goals

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

const SENIORITY: &str = "(?:senior|junior|lead|principal|staff)";
const ROLE_NOUN: &str = "(?:engineer|developer|architect|manager|analyst|scientist|designer)";
const LOCATION_ANCHOR: &str = "(?:in|near|around|based in)";

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(
            r"(?:seeking|looking for|interested in)(?:\s+a)?\s+(?:role|position|job|career)?\s+(?:as|in)?\s+(?:an?)?\s+({SENIORITY}?\s*[a-z\s]+{ROLE_NOUN})"
        ),
        format!(r"{SENIORITY}?\s*([a-z\s]+{ROLE_NOUN})\s+(?:role|position|job)"),
        format!(r"(?:become|be)\s+(?:a|an)\s+({SENIORITY}?\s*[a-z\s]+{ROLE_NOUN})"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid career goal title regex"))
    .collect()
});

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"{LOCATION_ANCHOR}\s+([a-z\s]+(?:area|city|region|county))"),
        format!(r"{LOCATION_ANCHOR}\s+([a-z]+,\s*[a-z]{{2}})"),
        format!(r"{LOCATION_ANCHOR}\s+([a-z\s]+)"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid career goal location regex"))
    .collect()
});

const COMMON_TITLES: &[&str] = &[
    "software engineer",
    "data scientist",
    "machine learning engineer",
    "devops engineer",
    "full stack developer",
    "frontend developer",
    "backend developer",
    "site reliability engineer",
    "cloud engineer",
    "ai engineer",
    "web developer",
    "product manager",
    "project manager",
    "ux designer",
    "systems engineer",
    "solutions architect",
    "data engineer",
    "ml engineer",
    "research scientist",
];

const COMMON_CITIES: &[&str] = &[
    "new york",
    "san francisco",
    "seattle",
    "boston",
    "austin",
    "chicago",
    "los angeles",
    "denver",
    "washington dc",
    "atlanta",
    "dallas",
];

const WORK_PREFERENCES: &[&str] = &[
    "remote",
    "hybrid",
    "onsite",
    "in-office",
    "work from home",
    "flexible",
    "part-time",
    "full-time",
];

const INDUSTRIES: &[&str] = &[
    "tech",
    "healthcare",
    "finance",
    "fintech",
    "edtech",
    "e-commerce",
    "retail",
    "gaming",
    "entertainment",
    "education",
    "manufacturing",
    "automotive",
    "energy",
    "sustainability",
    "non-profit",
    "government",
    "consulting",
];

/// Titles, locations, work modes and industries mentioned in career goals.
///
/// Every entry is title-cased. All four sets are empty for empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGoalKeywords {
    pub job_titles: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub work_preferences: BTreeSet<String>,
    pub industries: BTreeSet<String>,
}

impl CareerGoalKeywords {
    pub fn is_empty(&self) -> bool {
        self.job_titles.is_empty()
            && self.locations.is_empty()
            && self.work_preferences.is_empty()
            && self.industries.is_empty()
    }
}

pub fn extract_career_goal_keywords(goals: &str) -> CareerGoalKeywords {
    let goals = goals.to_lowercase();
    if goals.trim().is_empty() {
        return CareerGoalKeywords::default();
    }

    let mut job_titles = captured_phrases(&TITLE_PATTERNS, &goals);
    job_titles.extend(mentioned(COMMON_TITLES, &goals));

    let mut locations = captured_phrases(&LOCATION_PATTERNS, &goals);
    locations.extend(mentioned(COMMON_CITIES, &goals));

    CareerGoalKeywords {
        job_titles,
        locations,
        work_preferences: mentioned(WORK_PREFERENCES, &goals).collect(),
        industries: mentioned(INDUSTRIES, &goals).collect(),
    }
}

/// Title-cases `text`: a letter following a non-letter is uppercased, every
/// other letter is lowercased.
pub fn title_case(text: &str) -> String {
    let mut previous_is_letter = false;
    text.chars()
        .flat_map(|c| {
            let upper = !previous_is_letter;
            previous_is_letter = c.is_alphabetic();
            let mapped: Vec<char> = if upper {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            mapped
        })
        .collect()
}

fn captured_phrases(patterns: &[Regex], goals: &str) -> BTreeSet<String> {
    patterns
        .iter()
        .flat_map(|pattern| pattern.captures_iter(goals))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|phrase| !phrase.is_empty())
        .map(title_case)
        .collect()
}

fn mentioned<'a>(terms: &'a [&'a str], goals: &'a str) -> impl Iterator<Item = String> + 'a {
    terms
        .iter()
        .filter(move |term| goals.contains(*term))
        .map(|term| title_case(term))
}
