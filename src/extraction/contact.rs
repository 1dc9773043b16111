//! Contact fields: name, email, phone and location

use super::catalog::COUNTRY_TOKENS;
use super::profile::{LOCATION_NOT_FOUND, NOT_FOUND, UNKNOWN_NAME};
use super::sections::char_prefix;
use super::{first_hit, Strategy};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("Invalid phone regex")
});

static CITY_REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z\s]+),?\s+([A-Za-z\s]+)").expect("Invalid location regex")
});

/// Lines scanned for a name at the top of the résumé.
const NAME_SCAN_LINES: usize = 5;
/// Lines scanned from the "Details" anchor for a country token.
const DETAILS_SCAN_LINES: usize = 10;
/// Characters examined by the loose city/region fallback.
const LOCATION_PREFIX_CHARS: usize = 500;

pub fn extract_name(text: &str) -> String {
    name_from_header(text).unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

pub fn extract_email(text: &str) -> String {
    email_pattern(text).unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_phone(text: &str) -> String {
    phone_pattern(text).unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_location(text: &str) -> String {
    const STRATEGIES: &[Strategy<String>] = &[location_from_details, location_from_prefix];
    first_hit(text, STRATEGIES).unwrap_or_else(|| LOCATION_NOT_FOUND.to_string())
}

/// A name is the first short line (two or three words) near the top.
fn name_from_header(text: &str) -> Option<String> {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .find(|line| matches!(line.split_whitespace().count(), 2 | 3))
        .map(|line| line.trim().to_string())
}

fn email_pattern(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

fn phone_pattern(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Pairs a bare country line with the city line right above it.
///
/// The scan starts at the first line containing "Details", or at the top of
/// the document when there is no such line.
fn location_from_details(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines
        .iter()
        .position(|line| line.contains("Details"))
        .unwrap_or(0);
    let end = (start + DETAILS_SCAN_LINES).min(lines.len());

    (start..end)
        .find(|&idx| COUNTRY_TOKENS.contains(&lines[idx]))
        .map(|idx| format!("{}, {}", lines[idx.saturating_sub(1)], lines[idx]))
}

fn location_from_prefix(text: &str) -> Option<String> {
    CITY_REGION_RE
        .find(char_prefix(text, LOCATION_PREFIX_CHARS))
        .map(|m| m.as_str().trim().to_string())
        .filter(|location| !location.is_empty())
}
