//! Motivation factors and the rules that score them

use super::goals::extract_career_goal_keywords;
use super::job::JobPosting;
use super::vocabulary::{
    Vocabulary, BALANCE_TERMS, CULTURE_TERMS, GROWTH_TERMS, SALARY_TERMS, STABILITY_TERMS,
};
use crate::error::Result;
use crate::extraction::profile::LOCATION_NOT_FOUND;
use crate::extraction::ParsedProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SALARY: &str = "Salary";
pub const LOCATION: &str = "Location";
pub const COMPANY_CULTURE: &str = "Company Culture";
pub const WORK_LIFE_BALANCE: &str = "Work-Life Balance";
pub const GROWTH_OPPORTUNITIES: &str = "Growth Opportunities";
pub const JOB_STABILITY: &str = "Job Stability";
pub const REMOTE_WORK: &str = "Remote Work";
pub const COMPANY_SIZE: &str = "Company Size";
pub const INDUSTRY_MATCH: &str = "Industry Match";
pub const SKILL_MATCH: &str = "Skill Match";

/// Every factor name with a dedicated rule.
pub const KNOWN_FACTORS: &[&str] = &[
    SALARY,
    LOCATION,
    COMPANY_CULTURE,
    WORK_LIFE_BALANCE,
    GROWTH_OPPORTUNITIES,
    JOB_STABILITY,
    REMOTE_WORK,
    COMPANY_SIZE,
    INDUSTRY_MATCH,
    SKILL_MATCH,
];

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 10;

/// Placeholder selections that mean "no preferred location".
const LOCATION_PLACEHOLDERS: &[&str] = &["Select Location", "Any"];

/// Credit given when a factor cannot be judged from the data at hand.
const HALF_CREDIT: f64 = 0.5;
const REMOTE_LOCATION_CREDIT: f64 = 0.8;
const HYBRID_CREDIT: f64 = 0.7;
/// Skill Match saturates at this many matched skills, or 30% of the list when larger.
const SKILL_SATURATION_FLOOR: f64 = 5.0;
const SKILL_SATURATION_SHARE: f64 = 0.3;

/// A named, user-weighted dimension of job desirability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationFactor {
    pub name: String,
    pub weight: u32,
}

impl MotivationFactor {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn is_known(&self) -> bool {
        KNOWN_FACTORS.contains(&self.name.as_str())
    }
}

/// The matrix used when no configuration supplies one.
pub fn default_factors() -> Vec<MotivationFactor> {
    vec![
        MotivationFactor::new(SALARY, 5),
        MotivationFactor::new(LOCATION, 4),
        MotivationFactor::new(COMPANY_CULTURE, 3),
        MotivationFactor::new(WORK_LIFE_BALANCE, 3),
        MotivationFactor::new(GROWTH_OPPORTUNITIES, 4),
        MotivationFactor::new(SKILL_MATCH, 5),
    ]
}

/// Profile facts the rules need, derived once per scoring batch.
#[derive(Debug, Clone, Default)]
pub struct ScoringContext {
    /// Lowercased location to compare against, if one is usable.
    pub location: Option<String>,
    /// Lowercased industries named in the career goals.
    pub industries: Vec<String>,
    /// Lowercased résumé skills.
    pub skills: Vec<String>,
}

impl ScoringContext {
    pub fn from_profile(profile: &ParsedProfile) -> Self {
        let preferred = profile
            .preferred_location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty() && !LOCATION_PLACEHOLDERS.contains(loc));
        let location = preferred
            .or(Some(profile.location.trim()))
            .filter(|loc| !loc.is_empty() && *loc != LOCATION_NOT_FOUND)
            .map(str::to_lowercase);

        let industries = extract_career_goal_keywords(profile.career_goals_text())
            .industries
            .iter()
            .map(|industry| industry.to_lowercase())
            .collect();

        Self {
            location,
            industries,
            skills: profile.skills.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// How one factor turns a posting into a fraction of its weight.
#[derive(Debug, Clone)]
pub enum FactorRule {
    /// Full credit when any term appears, half otherwise.
    AnyTerm(Vocabulary),
    /// Credit grows with distinct terms found, full at `saturation`.
    TermCount {
        vocabulary: Vocabulary,
        saturation: f64,
    },
    Location,
    RemoteWork,
    IndustryMatch,
    SkillMatch,
    /// Fixed credit regardless of the posting.
    Constant(f64),
}

impl FactorRule {
    /// Fraction of the factor weight earned, in `[0, 1]`.
    pub fn credit(&self, job: &JobPosting, ctx: &ScoringContext) -> f64 {
        let description = job.description.to_lowercase();
        match self {
            Self::AnyTerm(vocabulary) => {
                if vocabulary.any_in(&description) {
                    1.0
                } else {
                    HALF_CREDIT
                }
            }
            Self::TermCount {
                vocabulary,
                saturation,
            } => (vocabulary.count_distinct(&description) as f64 / saturation).min(1.0),
            Self::Location => match &ctx.location {
                None => HALF_CREDIT,
                Some(location) if job.location.to_lowercase().contains(location) => 1.0,
                Some(_) if job.mentions("remote") => REMOTE_LOCATION_CREDIT,
                Some(_) => 0.0,
            },
            Self::RemoteWork => {
                if job.mentions("remote") {
                    1.0
                } else if job.mentions("hybrid") {
                    HYBRID_CREDIT
                } else {
                    0.0
                }
            }
            Self::IndustryMatch => {
                if ctx.industries.is_empty() {
                    HALF_CREDIT
                } else if ctx.industries.iter().any(|i| description.contains(i.as_str())) {
                    1.0
                } else {
                    0.0
                }
            }
            Self::SkillMatch => {
                if ctx.skills.is_empty() {
                    return HALF_CREDIT;
                }
                let matched = ctx
                    .skills
                    .iter()
                    .filter(|skill| description.contains(skill.as_str()))
                    .count() as f64;
                let saturation =
                    SKILL_SATURATION_FLOOR.max(ctx.skills.len() as f64 * SKILL_SATURATION_SHARE);
                (matched / saturation).min(1.0)
            }
            Self::Constant(credit) => *credit,
        }
    }
}

/// Name to rule lookup with a half-credit default for unknown names.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<&'static str, FactorRule>,
    fallback: FactorRule,
}

impl RuleTable {
    pub fn new() -> Result<Self> {
        let term_count = |terms: &'static [&'static str], saturation: f64| -> Result<FactorRule> {
            Ok(FactorRule::TermCount {
                vocabulary: Vocabulary::new(terms)?,
                saturation,
            })
        };

        let rules = HashMap::from([
            (SALARY, FactorRule::AnyTerm(Vocabulary::new(SALARY_TERMS)?)),
            (LOCATION, FactorRule::Location),
            (COMPANY_CULTURE, term_count(CULTURE_TERMS, 3.0)?),
            (WORK_LIFE_BALANCE, term_count(BALANCE_TERMS, 2.0)?),
            (GROWTH_OPPORTUNITIES, term_count(GROWTH_TERMS, 2.0)?),
            (JOB_STABILITY, term_count(STABILITY_TERMS, 2.0)?),
            (REMOTE_WORK, FactorRule::RemoteWork),
            (COMPANY_SIZE, FactorRule::Constant(HALF_CREDIT)),
            (INDUSTRY_MATCH, FactorRule::IndustryMatch),
            (SKILL_MATCH, FactorRule::SkillMatch),
        ]);

        Ok(Self {
            rules,
            fallback: FactorRule::Constant(HALF_CREDIT),
        })
    }

    pub fn rule_for(&self, name: &str) -> &FactorRule {
        self.rules.get(name).unwrap_or(&self.fallback)
    }
}
