//! Error handling for the resume matcher
//!
//! Extraction and scoring never fail: missing structure resolves to sentinel
//! values. Errors only come from the boundary (reading documents and job
//! files, loading configuration, rendering output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Matcher construction error: {0}")]
    Matcher(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

impl From<aho_corasick::BuildError> for ResumeMatcherError {
    fn from(err: aho_corasick::BuildError) -> Self {
        ResumeMatcherError::Matcher(err.to_string())
    }
}

impl From<toml::de::Error> for ResumeMatcherError {
    fn from(err: toml::de::Error) -> Self {
        ResumeMatcherError::Configuration(format!("Failed to parse config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = ResumeMatcherError::UnsupportedFormat("resume.docx".to_string());
        assert_eq!(err.to_string(), "File format not supported: resume.docx");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ResumeMatcherError = io.into();
        assert!(matches!(err, ResumeMatcherError::Io(_)));
    }
}
