//! Career-goal mining, search-title generation and weighted job scoring

pub mod factors;
pub mod goals;
pub mod job;
pub mod scorer;
pub mod titles;
pub mod vocabulary;

pub use factors::{default_factors, MotivationFactor, ScoringContext};
pub use goals::{extract_career_goal_keywords, CareerGoalKeywords};
pub use job::JobPosting;
pub use scorer::{FactorScore, JobMatcher, MatchCategory, MatchFilter, MatchResult, RankedJob};
pub use titles::relevant_job_titles;
