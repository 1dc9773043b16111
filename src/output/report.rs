//! Report structures for a ranked job search

use crate::matching::{MatchCategory, MatchFilter, MotivationFactor, RankedJob};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything produced by one `match` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Candidate name as extracted from the résumé
    pub candidate: String,

    /// Search terms generated for the candidate
    pub search_titles: Vec<String>,

    /// The motivation matrix the jobs were scored under
    pub factors: Vec<MotivationFactor>,

    /// Category counts and score statistics over the reported results
    pub summary: CategorySummary,

    /// Ranked results that passed the filter, best first
    pub results: Vec<RankedJob>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub excellent: usize,
    pub good: usize,
    pub moderate: usize,
    pub low: usize,
    pub average_percentage: f64,
    pub top_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Postings scored before filtering
    pub jobs_scored: usize,
    pub jobs_reported: usize,
    pub min_percentage: f64,
    pub version: String,
}

impl CategorySummary {
    pub fn from_results(results: &[RankedJob]) -> Self {
        let mut summary = Self::default();
        if results.is_empty() {
            return summary;
        }

        for ranked in results {
            *summary.count_mut(ranked.result.match_category) += 1;
        }

        let percentages = results.iter().map(|r| r.result.percentage_score);
        summary.average_percentage = percentages.clone().sum::<f64>() / results.len() as f64;
        summary.top_percentage = percentages.fold(f64::MIN, f64::max);
        summary
    }

    pub fn count(&self, category: MatchCategory) -> usize {
        match category {
            MatchCategory::Excellent => self.excellent,
            MatchCategory::Good => self.good,
            MatchCategory::Moderate => self.moderate,
            MatchCategory::Low => self.low,
        }
    }

    fn count_mut(&mut self, category: MatchCategory) -> &mut usize {
        match category {
            MatchCategory::Excellent => &mut self.excellent,
            MatchCategory::Good => &mut self.good,
            MatchCategory::Moderate => &mut self.moderate,
            MatchCategory::Low => &mut self.low,
        }
    }
}

impl MatchReport {
    /// Filters `ranked` and summarises what remains.
    pub fn new(
        candidate: impl Into<String>,
        search_titles: Vec<String>,
        factors: Vec<MotivationFactor>,
        ranked: Vec<RankedJob>,
        filter: &MatchFilter,
    ) -> Self {
        let jobs_scored = ranked.len();
        let results = filter.apply(ranked);

        Self {
            candidate: candidate.into(),
            search_titles,
            factors,
            summary: CategorySummary::from_results(&results),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                jobs_scored,
                jobs_reported: results.len(),
                min_percentage: filter.min_percentage,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{JobPosting, MatchResult};

    fn ranked(title: &str, percentage: f64) -> RankedJob {
        RankedJob {
            job: JobPosting::new(title, ""),
            result: MatchResult {
                total_score: percentage / 10.0,
                percentage_score: percentage,
                match_category: MatchCategory::from_percentage(percentage),
                factor_scores: Vec::new(),
            },
        }
    }

    #[test]
    fn test_summary_counts_and_stats() {
        let results = vec![ranked("a", 90.0), ranked("b", 72.0), ranked("c", 70.0), ranked("d", 12.0)];
        let summary = CategorySummary::from_results(&results);
        assert_eq!(summary.count(MatchCategory::Excellent), 1);
        assert_eq!(summary.count(MatchCategory::Good), 2);
        assert_eq!(summary.count(MatchCategory::Moderate), 0);
        assert_eq!(summary.count(MatchCategory::Low), 1);
        assert_eq!(summary.top_percentage, 90.0);
        assert!((summary.average_percentage - 61.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(CategorySummary::from_results(&[]), CategorySummary::default());
    }

    #[test]
    fn test_report_applies_filter() {
        let filter = MatchFilter {
            min_percentage: 50.0,
            ..MatchFilter::default()
        };
        let report = MatchReport::new(
            "Jane Doe",
            vec!["Rust Engineer".into()],
            Vec::new(),
            vec![ranked("a", 90.0), ranked("b", 20.0)],
            &filter,
        );
        assert_eq!(report.metadata.jobs_scored, 2);
        assert_eq!(report.metadata.jobs_reported, 1);
        assert_eq!(report.results[0].job.title, "a");
        assert_eq!(report.summary.excellent, 1);
    }
}
