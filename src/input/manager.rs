//! Input manager for résumé documents and job posting files

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::matching::JobPosting;
use log::{info, warn};
use std::path::Path;

/// Reads résumé documents and job posting files from disk.
#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Reads a résumé document into plain text with `\n` line separators.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        Self::ensure_exists(path)?;

        let file_type = Self::detect_file_type(path)?;
        if !file_type.is_resume_document() {
            return Err(ResumeMatcherError::UnsupportedFormat(format!(
                "Unsupported resume file type: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            _ => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
        };

        if text.trim().is_empty() {
            warn!("No text extracted from {}", path.display());
        }

        Ok(text)
    }

    /// Loads job postings from a JSON array file.
    pub async fn load_jobs(&self, path: &Path) -> Result<Vec<JobPosting>> {
        Self::ensure_exists(path)?;

        if Self::detect_file_type(path)? != FileType::Json {
            return Err(ResumeMatcherError::UnsupportedFormat(format!(
                "Job postings must be a JSON file: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let jobs: Vec<JobPosting> = serde_json::from_str(&content)?;
        info!("Loaded {} job postings from {}", jobs.len(), path.display());
        Ok(jobs)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )))
        }
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            ResumeMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

}
