//! Skills, languages and qualifications

use super::catalog::{DEGREE_MARKERS, LANGUAGE_CATALOG, QUALIFICATION_CATALOG, SKILL_CATALOG};
use super::profile::NOT_FOUND;
use super::sections::{capture, compile_catalog, non_empty_lines};
use super::{first_hit, Strategy};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static SKILLS_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Skills\n(.*?)(?:\n\n|\nProfile|\nEmployment)").expect("Invalid skills section regex")
});

static LANGUAGES_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Languages\n(.*?)(?:\n\n|\nEducation|\nEmployment)")
        .expect("Invalid languages section regex")
});

static EDUCATION_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Education\n(.*?)(?:\n\n|$)").expect("Invalid education section regex")
});

static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| compile_catalog(SKILL_CATALOG, true));

static LANGUAGE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| compile_catalog(LANGUAGE_CATALOG, false));

static QUALIFICATION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| compile_catalog(QUALIFICATION_CATALOG, true));

/// Section lines of this length or shorter are ignored as skills.
const MIN_SKILL_LINE_CHARS: usize = 2;

/// Catalog hits anywhere in the text, unioned with the lines of the Skills section.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let mut skills: BTreeSet<String> = SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(skill, _)| skill.to_string())
        .collect();

    if let Some(section) = capture(&SKILLS_SECTION_RE, text, 1) {
        skills.extend(
            non_empty_lines(section)
                .filter(|line| line.chars().count() > MIN_SKILL_LINE_CHARS)
                .map(str::to_string),
        );
    }

    skills
}

pub fn extract_languages(text: &str) -> Vec<String> {
    const STRATEGIES: &[Strategy<Vec<String>>] = &[languages_from_section, languages_from_catalog];
    first_hit(text, STRATEGIES).unwrap_or_else(|| vec![NOT_FOUND.to_string()])
}

pub fn extract_qualifications(text: &str) -> BTreeSet<String> {
    const STRATEGIES: &[Strategy<BTreeSet<String>>] =
        &[degrees_from_education, qualifications_from_catalog];
    first_hit(text, STRATEGIES).unwrap_or_else(|| BTreeSet::from([NOT_FOUND.to_string()]))
}

fn languages_from_section(text: &str) -> Option<Vec<String>> {
    let section = capture(&LANGUAGES_SECTION_RE, text, 1)?;
    let languages: Vec<String> = non_empty_lines(section).map(str::to_string).collect();
    (!languages.is_empty()).then_some(languages)
}

fn languages_from_catalog(text: &str) -> Option<Vec<String>> {
    let languages: Vec<String> = LANGUAGE_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(language, _)| language.to_string())
        .collect();
    (!languages.is_empty()).then_some(languages)
}

fn degrees_from_education(text: &str) -> Option<BTreeSet<String>> {
    let section = capture(&EDUCATION_SECTION_RE, text, 1)?;
    let degrees: BTreeSet<String> = non_empty_lines(section)
        .filter(|line| DEGREE_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(str::to_string)
        .collect();
    (!degrees.is_empty()).then_some(degrees)
}

fn qualifications_from_catalog(text: &str) -> Option<BTreeSet<String>> {
    let found: BTreeSet<String> = QUALIFICATION_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(qualification, _)| qualification.to_string())
        .collect();
    (!found.is_empty()).then_some(found)
}
