//! Section location and whole-word matching helpers shared by the extractors.

use regex::Regex;

/// Returns capture group `group` of the first match of `pattern`, if any.
pub fn capture<'t>(pattern: &Regex, text: &'t str, group: usize) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str())
}

/// Trimmed, non-empty lines of a section body.
pub fn non_empty_lines(section: &str) -> impl Iterator<Item = &str> {
    section.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// The first `max_chars` characters of `text`.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds a whole-word matcher for a catalog term.
///
/// The term is escaped literally. A `\b` anchor is only added on a side where
/// the term starts or ends with a word character, so terms such as `C++`,
/// `C#`, `Node.js` and `B.A.` still match where they stand alone.
pub fn whole_word(term: &str, case_insensitive: bool) -> Regex {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trail = if term.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    let flags = if case_insensitive { "(?i)" } else { "" };

    Regex::new(&format!("{flags}{lead}{}{trail}", regex::escape(term)))
        .expect("escaped catalog term is a valid pattern")
}

/// Compiles one whole-word matcher per catalog entry.
pub fn compile_catalog(
    catalog: &'static [&'static str],
    case_insensitive: bool,
) -> Vec<(&'static str, Regex)> {
    catalog
        .iter()
        .map(|term| (*term, whole_word(term, case_insensitive)))
        .collect()
}
