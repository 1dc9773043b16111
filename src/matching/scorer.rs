//! Weighted multi-factor job scoring and ranking

use super::factors::{MotivationFactor, RuleTable, ScoringContext};
use super::job::JobPosting;
use crate::error::Result;
use crate::extraction::ParsedProfile;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage reported when the factor weights sum to zero.
const NEUTRAL_PERCENTAGE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchCategory {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl MatchCategory {
    pub const ALL: [MatchCategory; 4] = [Self::Excellent, Self::Good, Self::Moderate, Self::Low];

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 85.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::Good
        } else if percentage >= 50.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub name: String,
    pub weight: u32,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_score: f64,
    pub percentage_score: f64,
    pub match_category: MatchCategory,
    /// One entry per configured factor, in configuration order.
    pub factor_scores: Vec<FactorScore>,
}

impl MatchResult {
    pub fn factor(&self, name: &str) -> Option<&FactorScore> {
        self.factor_scores.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: JobPosting,
    pub result: MatchResult,
}

/// Post-ranking restrictions on which results are reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFilter {
    pub min_percentage: f64,
    /// Keep only postings surfaced by this search role (case-insensitive).
    pub role: Option<String>,
    /// Keep only postings at exactly this location.
    pub location: Option<String>,
}

impl MatchFilter {
    pub fn accepts(&self, ranked: &RankedJob) -> bool {
        ranked.result.percentage_score >= self.min_percentage
            && self
                .role
                .as_deref()
                .map_or(true, |role| ranked.job.role.eq_ignore_ascii_case(role))
            && self
                .location
                .as_deref()
                .map_or(true, |location| ranked.job.location == location)
    }

    pub fn apply(&self, ranked: Vec<RankedJob>) -> Vec<RankedJob> {
        ranked.into_iter().filter(|r| self.accepts(r)).collect()
    }
}

/// Scores postings against a profile under a motivation matrix.
#[derive(Debug, Clone)]
pub struct JobMatcher {
    rules: RuleTable,
}

impl JobMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleTable::new()?,
        })
    }

    pub fn score(
        &self,
        job: &JobPosting,
        profile: &ParsedProfile,
        factors: &[MotivationFactor],
    ) -> MatchResult {
        self.score_with_context(job, &ScoringContext::from_profile(profile), factors)
    }

    pub fn score_with_context(
        &self,
        job: &JobPosting,
        ctx: &ScoringContext,
        factors: &[MotivationFactor],
    ) -> MatchResult {
        let factor_scores: Vec<FactorScore> = factors
            .iter()
            .map(|factor| FactorScore {
                name: factor.name.clone(),
                weight: factor.weight,
                score: f64::from(factor.weight) * self.rules.rule_for(&factor.name).credit(job, ctx),
            })
            .collect();

        let total_score: f64 = factor_scores.iter().map(|f| f.score).sum();
        let max_score: f64 = factors.iter().map(|f| f64::from(f.weight)).sum();
        let percentage_score = if max_score > 0.0 {
            100.0 * total_score / max_score
        } else {
            NEUTRAL_PERCENTAGE
        };

        MatchResult {
            total_score,
            percentage_score,
            match_category: MatchCategory::from_percentage(percentage_score),
            factor_scores,
        }
    }

    /// Scores every posting and sorts by percentage, best first.
    ///
    /// The sort is stable: postings with equal percentages keep their input order.
    pub fn rank_jobs(
        &self,
        jobs: &[JobPosting],
        profile: &ParsedProfile,
        factors: &[MotivationFactor],
    ) -> Vec<RankedJob> {
        let ctx = ScoringContext::from_profile(profile);
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .map(|job| {
                let result = self.score_with_context(job, &ctx, factors);
                debug!(
                    "Scored '{}' at {}: {:.1}%",
                    job.title, job.company_name, result.percentage_score
                );
                RankedJob {
                    job: job.clone(),
                    result,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.result
                .percentage_score
                .total_cmp(&a.result.percentage_score)
        });

        info!("Ranked {} job postings", ranked.len());
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::factors::{
        COMPANY_CULTURE, JOB_STABILITY, REMOTE_WORK, SALARY, SKILL_MATCH,
    };
    use std::collections::BTreeSet;

    fn matcher() -> JobMatcher {
        JobMatcher::new().unwrap()
    }

    #[test]
    fn test_aggregate_percentage() {
        let factors = vec![
            MotivationFactor::new(SALARY, 5),
            MotivationFactor::new(REMOTE_WORK, 5),
        ];
        let job = JobPosting::new("Engineer", "Fully remote team").with_job_type("Remote");
        let result = matcher().score(&job, &ParsedProfile::default(), &factors);

        assert_eq!(result.factor(SALARY).unwrap().score, 2.5);
        assert_eq!(result.factor(REMOTE_WORK).unwrap().score, 5.0);
        assert_eq!(result.total_score, 7.5);
        assert_eq!(result.percentage_score, 75.0);
        assert_eq!(result.match_category, MatchCategory::Good);
    }

    #[test]
    fn test_skill_match_full_credit() {
        let profile = ParsedProfile {
            skills: ["Python", "Docker", "AWS", "SQL", "Kubernetes"]
                .into_iter()
                .map(String::from)
                .collect::<BTreeSet<_>>(),
            ..ParsedProfile::default()
        };
        let job = JobPosting::new("Engineer", "python docker aws sql kubernetes");
        let result = matcher().score(&job, &profile, &[MotivationFactor::new(SKILL_MATCH, 10)]);
        assert_eq!(result.factor(SKILL_MATCH).unwrap().score, 10.0);
    }

    #[test]
    fn test_on_site_posting_without_vocabulary() {
        let factors = vec![
            MotivationFactor::new(REMOTE_WORK, 4),
            MotivationFactor::new(COMPANY_CULTURE, 3),
            MotivationFactor::new(JOB_STABILITY, 2),
        ];
        let job = JobPosting::new("Engineer", "Write software").with_job_type("On-site");
        let result = matcher().score(&job, &ParsedProfile::default(), &factors);
        assert!(result.factor_scores.iter().all(|f| f.score == 0.0));
        assert_eq!(result.match_category, MatchCategory::Low);
    }

    #[test]
    fn test_no_factors_is_neutral() {
        let result = matcher().score(&JobPosting::default(), &ParsedProfile::default(), &[]);
        assert_eq!(result.percentage_score, 50.0);
        assert_eq!(result.match_category, MatchCategory::Moderate);
        assert!(result.factor_scores.is_empty());
    }

    #[test]
    fn test_duplicate_factor_names_are_kept() {
        let factors = vec![MotivationFactor::new(SALARY, 2), MotivationFactor::new(SALARY, 4)];
        let result = matcher().score(&JobPosting::default(), &ParsedProfile::default(), &factors);
        assert_eq!(result.factor_scores.len(), 2);
        assert_eq!(result.factor_scores[1].score, 2.0);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(MatchCategory::from_percentage(85.0), MatchCategory::Excellent);
        assert_eq!(MatchCategory::from_percentage(84.99), MatchCategory::Good);
        assert_eq!(MatchCategory::from_percentage(70.0), MatchCategory::Good);
        assert_eq!(MatchCategory::from_percentage(69.99), MatchCategory::Moderate);
        assert_eq!(MatchCategory::from_percentage(50.0), MatchCategory::Moderate);
        assert_eq!(MatchCategory::from_percentage(49.99), MatchCategory::Low);
        assert_eq!(MatchCategory::from_percentage(0.0), MatchCategory::Low);
    }

    #[test]
    fn test_ranking_is_stable_and_descending() {
        let factors = vec![MotivationFactor::new(REMOTE_WORK, 5)];
        let jobs = vec![
            JobPosting::new("First", "on-site"),
            JobPosting::new("Second", "remote"),
            JobPosting::new("Third", "on-site"),
            JobPosting::new("Fourth", "hybrid"),
        ];
        let ranked = matcher().rank_jobs(&jobs, &ParsedProfile::default(), &factors);
        let titles: Vec<_> = ranked.iter().map(|r| r.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "Fourth", "First", "Third"]);
    }

    #[test]
    fn test_filter() {
        let factors = vec![MotivationFactor::new(REMOTE_WORK, 5)];
        let jobs = vec![
            JobPosting::new("A", "remote").with_role("Rust Developer").with_location("Remote"),
            JobPosting::new("B", "hybrid").with_role("Data Engineer").with_location("Boston"),
            JobPosting::new("C", "office").with_role("Rust Developer").with_location("Boston"),
        ];
        let ranked = matcher().rank_jobs(&jobs, &ParsedProfile::default(), &factors);

        let by_score = MatchFilter {
            min_percentage: 60.0,
            ..MatchFilter::default()
        };
        assert_eq!(by_score.apply(ranked.clone()).len(), 2);

        let by_role = MatchFilter {
            role: Some("rust developer".into()),
            ..MatchFilter::default()
        };
        let kept: Vec<_> = by_role.apply(ranked.clone()).into_iter().map(|r| r.job.title).collect();
        assert_eq!(kept, vec!["A", "C"]);

        let by_location = MatchFilter {
            location: Some("Boston".into()),
            min_percentage: 10.0,
            ..MatchFilter::default()
        };
        let kept: Vec<_> = by_location.apply(ranked).into_iter().map(|r| r.job.title).collect();
        assert_eq!(kept, vec!["B"]);
    }
}
