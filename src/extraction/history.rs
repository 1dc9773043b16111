//! Experience, employment history and the profile summary

use super::catalog::ROLE_KEYWORDS;
use super::profile::{
    EMPLOYMENT_NOT_FOUND, EMPLOYMENT_UNPARSED, EXPERIENCE_NOT_FOUND, SUMMARY_NOT_FOUND,
};
use super::sections::{capture, char_prefix};
use super::{first_hit, Strategy};
use regex::Regex;
use std::sync::LazyLock;

/// A date range such as `Jan 2020 — PRESENT`, `March 2018 - June 2021`.
const DATE_RANGE: &str = r"(\w+\s+\d{4})\s*[—–-]\s*(\w+\s+\d{4}|PRESENT)";

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\+?\s*years?(?:\s+of\s+experience)?").expect("Invalid years regex")
});

static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){DATE_RANGE}")).expect("Invalid employment period regex")
});

static EMPLOYMENT_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Employment History\n(.*?)(?:\nEducation|\n\nEducation|$)")
        .expect("Invalid employment section regex")
});

static FULL_JOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?im)(.*?),\s+(.*?),\s+(.*?)\n{DATE_RANGE}"))
        .expect("Invalid job entry regex")
});

static SHORT_JOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?im)(.*?),\s+(.*?)\n{DATE_RANGE}")).expect("Invalid job entry regex")
});

static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", ROLE_KEYWORDS.join("|"))).expect("Invalid role regex")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("Invalid year regex"));

static PROFILE_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Profile\n(.*?)(?:\nEmployment|\n\nEmployment)")
        .expect("Invalid profile section regex")
});

static SUMMARY_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(Summary|About)\n(.*?)(?:\n\n|\nSkills|\nExperience)")
        .expect("Invalid summary section regex")
});

const SUMMARY_MAX_CHARS: usize = 500;
const ELLIPSIS: &str = "...";

pub fn extract_experience(text: &str) -> String {
    const STRATEGIES: &[Strategy<String>] = &[stated_years, counted_periods];
    first_hit(text, STRATEGIES).unwrap_or_else(|| EXPERIENCE_NOT_FOUND.to_string())
}

/// Jobs from the "Employment History" section, most specific layout first.
///
/// Returns a single sentinel entry when the section is missing, and a
/// different one when the section exists but no layout fits it.
pub fn extract_employment_history(text: &str) -> Vec<String> {
    const STRATEGIES: &[Strategy<Vec<String>>] = &[full_entries, short_entries, role_lines];

    let Some(section) = capture(&EMPLOYMENT_SECTION_RE, text, 1) else {
        return vec![EMPLOYMENT_NOT_FOUND.to_string()];
    };
    first_hit(section, STRATEGIES).unwrap_or_else(|| vec![EMPLOYMENT_UNPARSED.to_string()])
}

pub fn extract_profile_summary(text: &str) -> String {
    const STRATEGIES: &[Strategy<String>] = &[profile_section, summary_section];
    first_hit(text, STRATEGIES)
        .map(|summary| truncate_summary(&summary))
        .unwrap_or_else(|| SUMMARY_NOT_FOUND.to_string())
}

fn stated_years(text: &str) -> Option<String> {
    YEARS_RE
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .map(|years| format!("{years} years of experience"))
}

fn counted_periods(text: &str) -> Option<String> {
    match PERIOD_RE.find_iter(text).count() {
        0 => None,
        count => Some(format!("{count} employment periods found")),
    }
}

fn full_entries(section: &str) -> Option<Vec<String>> {
    let jobs: Vec<String> = FULL_JOB_RE
        .captures_iter(section)
        .map(|caps| {
            format!(
                "{} at {}, {} ({} - {})",
                caps[1].trim(),
                caps[2].trim(),
                caps[3].trim(),
                caps[4].trim(),
                caps[5].trim()
            )
        })
        .collect();
    (!jobs.is_empty()).then_some(jobs)
}

fn short_entries(section: &str) -> Option<Vec<String>> {
    let jobs: Vec<String> = SHORT_JOB_RE
        .captures_iter(section)
        .map(|caps| {
            format!(
                "{} at {} ({} - {})",
                caps[1].trim(),
                caps[2].trim(),
                caps[3].trim(),
                caps[4].trim()
            )
        })
        .collect();
    (!jobs.is_empty()).then_some(jobs)
}

/// Lines naming a role whose following line carries a year.
fn role_lines(section: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = section.split('\n').collect();
    let jobs: Vec<String> = lines
        .windows(2)
        .filter(|pair| ROLE_RE.is_match(pair[0]) && YEAR_RE.is_match(pair[1]))
        .map(|pair| pair[0].to_string())
        .collect();
    (!jobs.is_empty()).then_some(jobs)
}

fn profile_section(text: &str) -> Option<String> {
    capture(&PROFILE_SECTION_RE, text, 1)
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .map(str::to_string)
}

fn summary_section(text: &str) -> Option<String> {
    capture(&SUMMARY_SECTION_RE, text, 2)
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .map(str::to_string)
}

fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary.to_string();
    }
    let keep = SUMMARY_MAX_CHARS - ELLIPSIS.len();
    format!("{}{ELLIPSIS}", char_prefix(summary, keep))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_takes_the_maximum() {
        let text = "5 years of experience in backend work, 10+ years in software overall";
        assert_eq!(extract_experience(text), "10 years of experience");
    }

    #[test]
    fn test_experience_counts_periods_without_years() {
        let text = "Engineer\nJan 2019 - Dec 2020\nLead\nJanuary 2021 — present";
        assert_eq!(extract_experience(text), "2 employment periods found");
    }

    #[test]
    fn test_experience_sentinel() {
        assert_eq!(extract_experience("no dates here"), EXPERIENCE_NOT_FOUND);
    }

    #[test]
    fn test_full_employment_entry_with_em_dash() {
        let text = "Employment History\nSenior Engineer, Acme Inc, Boston\nJan 2020 — PRESENT\n";
        assert_eq!(
            extract_employment_history(text),
            vec!["Senior Engineer at Acme Inc, Boston (Jan 2020 - PRESENT)"]
        );
    }

    #[test]
    fn test_multiple_full_entries_stop_at_education() {
        let text = "Employment History\n\
                    Staff Engineer, Globex, Remote\nMarch 2021 – PRESENT\n\
                    Developer, Initech, Austin\nJune 2017 - February 2021\n\
                    Education\nBachelor of Science";
        assert_eq!(
            extract_employment_history(text),
            vec![
                "Staff Engineer at Globex, Remote (March 2021 - PRESENT)",
                "Developer at Initech, Austin (June 2017 - February 2021)",
            ]
        );
    }

    #[test]
    fn test_short_employment_entry() {
        let text = "Employment History\nData Analyst, Umbrella\nMay 2015 - April 2018\n";
        assert_eq!(
            extract_employment_history(text),
            vec!["Data Analyst at Umbrella (May 2015 - April 2018)"]
        );
    }

    #[test]
    fn test_role_line_scan() {
        let text = "Employment History\nPrincipal Architect at Hooli\n2012 to 2016\nIntern\n";
        assert_eq!(extract_employment_history(text), vec!["Principal Architect at Hooli"]);
    }

    #[test]
    fn test_employment_sentinels() {
        assert_eq!(extract_employment_history("no section"), vec![EMPLOYMENT_NOT_FOUND]);
        assert_eq!(
            extract_employment_history("Employment History\nodd jobs here and there"),
            vec![EMPLOYMENT_UNPARSED]
        );
    }

    #[test]
    fn test_profile_summary_from_profile_section() {
        let text = "Profile\n  Pragmatic engineer who ships.  \nEmployment History\nx";
        assert_eq!(extract_profile_summary(text), "Pragmatic engineer who ships.");
    }

    #[test]
    fn test_profile_summary_from_about_section() {
        let text = "About\nBuilds reliable systems.\n\nSkills\nRust";
        assert_eq!(extract_profile_summary(text), "Builds reliable systems.");
    }

    #[test]
    fn test_profile_summary_is_truncated() {
        let body = "a".repeat(620);
        let text = format!("Profile\n{body}\nEmployment History\n");
        let summary = extract_profile_summary(&text);
        assert_eq!(summary.chars().count(), 500);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_about_summary_is_truncated() {
        let body = "b".repeat(600);
        let text = format!("About\n{body}\n\nSkills\nRust");
        let summary = extract_profile_summary(&text);
        assert_eq!(summary.chars().count(), 500);
        assert_eq!(summary, format!("{}...", "b".repeat(497)));
    }

    #[test]
    fn test_profile_summary_sentinel() {
        assert_eq!(extract_profile_summary("nothing"), SUMMARY_NOT_FOUND);
    }
}
