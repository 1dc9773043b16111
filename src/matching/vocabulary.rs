//! Keyword vocabularies searched in job descriptions

use crate::error::Result;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

pub const SALARY_TERMS: &[&str] = &[
    "competitive salary",
    "excellent compensation",
    "high pay",
    "top pay",
];

pub const CULTURE_TERMS: &[&str] = &[
    "work-life balance",
    "inclusive",
    "diversity",
    "collaborative",
    "flexible",
    "innovative",
    "team-oriented",
    "growth opportunities",
];

pub const BALANCE_TERMS: &[&str] = &[
    "flexible hours",
    "work-life balance",
    "remote work",
    "flexible schedule",
    "family friendly",
    "paid time off",
    "pto",
    "vacation",
];

pub const GROWTH_TERMS: &[&str] = &[
    "career advancement",
    "professional development",
    "promotion",
    "training",
    "learning",
    "mentorship",
    "growth",
    "career path",
];

pub const STABILITY_TERMS: &[&str] = &[
    "established company",
    "long-term",
    "stable",
    "security",
    "permanent position",
    "industry leader",
];

/// A fixed term list compiled into one case-insensitive automaton.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    matcher: AhoCorasick,
}

impl Vocabulary {
    pub fn new(terms: &'static [&'static str]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(terms)?;
        Ok(Self { matcher })
    }

    /// Number of distinct terms occurring anywhere in `text`, overlaps included.
    pub fn count_distinct(&self, text: &str) -> usize {
        self.matcher
            .find_overlapping_iter(text)
            .map(|m| m.pattern())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn any_in(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}
