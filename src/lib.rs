//! Resume matcher library
//!
//! Extracts structured fields from résumé text and ranks job postings
//! against the resulting profile under a weighted motivation matrix.

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use extraction::{parse_resume, ParsedProfile};
pub use matching::{JobMatcher, JobPosting, MatchResult, MotivationFactor};
