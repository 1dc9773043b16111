//! Text extraction from various file formats
//!
//! Résumé extractors depend on line structure: headings on their own line
//! and blank lines between sections. Every extractor here keeps it.

use crate::error::{Result, ResumeMatcherError};
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

static EXCESS_BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank line regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeMatcherError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(normalize_line_endings(&text))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(normalize_line_endings(&content))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&normalize_line_endings(&markdown)))
    }
}

/// Converts `\r\n` and lone `\r` separators to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Flattens Markdown to plain lines.
///
/// Headings and list items end with a newline. Paragraphs, lists and code
/// blocks end with a blank line.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => text.push('\n'),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::List(_))
            | Event::End(Tag::CodeBlock(_))
            | Event::Rule => text.push_str("\n\n"),
            _ => {}
        }
    }

    let trimmed: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    EXCESS_BLANK_LINES_RE
        .replace_all(&trimmed.join("\n"), "\n\n")
        .trim()
        .to_string()
}
