//! Integration tests for the resume matcher

use resume_matcher::config::Config;
use resume_matcher::extraction::parse_resume;
use resume_matcher::input::InputManager;
use resume_matcher::matching::{
    default_factors, relevant_job_titles, JobMatcher, MatchCategory, MatchFilter,
};
use resume_matcher::output::report::MatchReport;
use resume_matcher::ResumeMatcherError;
use std::path::Path;

async fn sample_profile() -> resume_matcher::ParsedProfile {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    parse_resume(&text)
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let profile = sample_profile().await;

    assert_eq!(profile.name, "Priya Raman");
    assert_eq!(profile.email, "priya.raman@example.com");
    assert_eq!(profile.phone, "(512) 555-0199");
    assert_eq!(profile.location, "Austin, USA");
    assert!(profile.skills.contains("Node.js"));
    assert!(profile.skills.contains("Technical Leadership"));
    assert_eq!(profile.languages, vec!["English", "Tamil"]);
    assert_eq!(profile.experience, "9 years of experience");
    assert_eq!(
        profile.employment_history,
        vec![
            "Senior Software Engineer at Lonestar Analytics, Austin (March 2019 - PRESENT)",
            "Software Engineer at Bluebonnet Labs, Dallas (June 2014 - February 2019)",
        ]
    );
    assert_eq!(profile.qualifications.len(), 2);
    assert!(profile.profile_summary.starts_with("Backend engineer"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(!text.contains("**"));
    assert!(!text.contains("##"));

    let profile = parse_resume(&text);
    assert_eq!(profile.name, "Priya Raman");
    assert!(profile.skills.contains("React"));
    assert_eq!(profile.experience, "9 years of experience");
    assert_eq!(
        profile.profile_summary,
        "Backend engineer with 9+ years of experience building APIs."
    );
    assert_eq!(
        profile.employment_history,
        vec!["Senior Software Engineer at Lonestar Analytics, Austin (March 2019 - PRESENT)"]
    );
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_search_titles_from_resume() {
    let profile = sample_profile().await;
    assert_eq!(
        relevant_job_titles(&profile),
        vec![
            "Senior Software Engineer",
            "Software Engineer",
            "Python Engineer",
            "Python Developer",
        ]
    );

    let with_goals = profile
        .with_career_goals("Seeking a backend developer position in fintech, remote or hybrid");
    let titles = relevant_job_titles(&with_goals);
    assert!(titles.len() <= 5);
    assert_eq!(titles[0], "Backend Developer");
}

#[tokio::test]
async fn test_rank_sample_jobs() {
    let profile = sample_profile().await.with_preferred_location("Austin");
    let jobs = InputManager::new()
        .load_jobs(Path::new("tests/fixtures/sample_jobs.json"))
        .await
        .unwrap();
    assert_eq!(jobs.len(), 4);
    assert_eq!(jobs[3].description, "N/A");

    let ranked = JobMatcher::new()
        .unwrap()
        .rank_jobs(&jobs, &profile, &default_factors());

    let titles: Vec<_> = ranked.iter().map(|r| r.job.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Senior Backend Engineer", "Platform Engineer", "Data Analyst", "Contract Developer"]
    );

    let best = &ranked[0].result;
    assert!((best.percentage_score - 100.0 * 20.0 / 24.0).abs() < 1e-9);
    assert_eq!(best.match_category, MatchCategory::Good);
    assert!((ranked[1].result.percentage_score - 31.25).abs() < 1e-9);
    assert_eq!(ranked[2].result.percentage_score, ranked[3].result.percentage_score);
}

#[tokio::test]
async fn test_report_with_filter() {
    let profile = sample_profile().await;
    let jobs = InputManager::new()
        .load_jobs(Path::new("tests/fixtures/sample_jobs.json"))
        .await
        .unwrap();
    let factors = Config::default().matching.factors;
    let ranked = JobMatcher::new().unwrap().rank_jobs(&jobs, &profile, &factors);

    let filter = MatchFilter {
        min_percentage: 25.0,
        role: Some("software engineer".into()),
        location: None,
    };
    let report = MatchReport::new(
        profile.name.clone(),
        relevant_job_titles(&profile),
        factors,
        ranked,
        &filter,
    );

    assert_eq!(report.metadata.jobs_scored, 4);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].job.title, "Platform Engineer");
    assert_eq!(report.summary.low, 1);
}
