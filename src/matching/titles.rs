//! Search-term generation from career goals, past roles and skills

use super::goals::extract_career_goal_keywords;
use crate::extraction::ParsedProfile;
use log::debug;

pub const MAX_SEARCH_TITLES: usize = 5;

/// Below this many titles the employment history and skills are consulted.
const MIN_GOAL_TITLES: usize = 3;

/// Skill-derived titles are built from at most this many priority keywords.
const MAX_SKILL_KEYWORDS: usize = 3;

const PRIORITY_SKILLS: &[&str] = &[
    "AI",
    "Machine Learning",
    "Python",
    "Java",
    "Cloud",
    "DevOps",
    "Architect",
    "Data Science",
    "Full Stack",
    "Backend",
    "Frontend",
    "Software Engineer",
];

/// Up to five distinct job titles to search for.
///
/// Titles named in the career goals come first, preferring those backed by a
/// listed skill. Past roles and skill-derived titles fill in when the goals
/// give fewer than three.
pub fn relevant_job_titles(profile: &ParsedProfile) -> Vec<String> {
    let mut titles = goal_titles(profile);

    if titles.len() < MIN_GOAL_TITLES {
        titles.extend(past_roles(&profile.employment_history));
        titles.extend(skill_titles(profile));
    }

    let mut unique: Vec<String> = Vec::with_capacity(MAX_SEARCH_TITLES);
    for title in titles {
        if title.is_empty() || unique.contains(&title) {
            continue;
        }
        unique.push(title);
        if unique.len() == MAX_SEARCH_TITLES {
            break;
        }
    }

    debug!("Generated search titles: {:?}", unique);
    unique
}

fn goal_titles(profile: &ParsedProfile) -> Vec<String> {
    let keywords = extract_career_goal_keywords(profile.career_goals_text());
    let skills: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    let validated: Vec<String> = keywords
        .job_titles
        .iter()
        .filter(|title| {
            let title = title.to_lowercase();
            skills.iter().any(|skill| skill.contains(&title))
        })
        .cloned()
        .collect();

    if validated.is_empty() {
        keywords.job_titles.into_iter().collect()
    } else {
        validated
    }
}

/// The text before the first literal "at" of each history entry.
fn past_roles(history: &[String]) -> impl Iterator<Item = String> + '_ {
    history.iter().filter_map(|entry| {
        entry
            .split_once("at")
            .map(|(before, _)| before.trim().trim_end_matches(',').to_string())
    })
}

fn skill_titles(profile: &ParsedProfile) -> Vec<String> {
    let skills: Vec<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();

    PRIORITY_SKILLS
        .iter()
        .filter(|keyword| {
            let keyword = keyword.to_lowercase();
            skills.iter().any(|skill| skill.contains(&keyword))
        })
        .take(MAX_SKILL_KEYWORDS)
        .flat_map(|keyword| [format!("{keyword} Engineer"), format!("{keyword} Developer")])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn profile(skills: &[&str], history: &[&str]) -> ParsedProfile {
        ParsedProfile {
            skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            employment_history: history.iter().map(|s| s.to_string()).collect(),
            ..ParsedProfile::default()
        }
    }

    #[test]
    fn test_falls_back_to_history_and_skills() {
        let p = profile(
            &["Python", "Cloud"],
            &["Senior Engineer at Acme Inc, Boston (Jan 2020 - PRESENT)"],
        );
        assert_eq!(
            relevant_job_titles(&p),
            vec![
                "Senior Engineer",
                "Python Engineer",
                "Python Developer",
                "Cloud Engineer",
                "Cloud Developer",
            ]
        );
    }

    #[test]
    fn test_literal_at_split() {
        // "Data" contains "at", so the split happens inside the word
        let p = profile(&[], &["Data Analyst at Umbrella (May 2015 - April 2018)"]);
        assert_eq!(relevant_job_titles(&p), vec!["D"]);
    }

    #[test]
    fn test_at_most_five_unique_titles() {
        let p = profile(
            &["AI", "Machine Learning", "Python", "Java"],
            &[
                "Lead Engineer at A (Jan 2020 - PRESENT)",
                "Lead Engineer at B (Jan 2018 - Dec 2019)",
                "Principal Engineer at C (Jan 2015 - Dec 2017)",
            ],
        )
        .with_career_goals("");
        let titles = relevant_job_titles(&p);
        assert!(titles.len() <= MAX_SEARCH_TITLES);
        let unique: BTreeSet<_> = titles.iter().collect();
        assert_eq!(unique.len(), titles.len());
        assert_eq!(titles[0], "Lead Engineer");
        assert_eq!(titles[1], "Principal Engineer");
    }

    #[test]
    fn test_goal_titles_validated_by_skills() {
        let p = profile(&["Data Engineer tooling", "Rust"], &[])
            .with_career_goals("Looking for a data engineer or data scientist position");
        let titles = relevant_job_titles(&p);
        // only the validated goal title survives, then the fallback adds nothing
        assert_eq!(titles, vec!["Data Engineer"]);
    }

    #[test]
    fn test_many_goal_titles_skip_fallback() {
        let p = profile(&["Python"], &["Senior Engineer at Acme (Jan 2020 - PRESENT)"])
            .with_career_goals("software engineer, data scientist, web developer or cloud engineer");
        let titles = relevant_job_titles(&p);
        assert!(!titles.contains(&"Senior Engineer".to_string()));
        assert!(!titles.contains(&"Python Engineer".to_string()));
        assert!(titles.contains(&"Software Engineer".to_string()));
    }

    #[test]
    fn test_empty_profile_gives_no_titles() {
        assert!(relevant_job_titles(&ParsedProfile::default()).is_empty());
    }
}
