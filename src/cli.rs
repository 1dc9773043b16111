//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(version)]
#[command(about = "Resume field extraction and weighted job matching")]
#[command(
    long_about = "Extract structured fields from a resume, mine career goals for search terms, and rank job postings against a weighted motivation matrix"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract structured fields from a resume
    Parse {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract job titles, locations, work preferences and industries from career goals
    Goals {
        /// Free-text career goals
        text: String,
    },

    /// Generate job search titles for a resume
    Titles {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Free-text career goals
        #[arg(short, long)]
        goals: Option<String>,
    },

    /// Score and rank job postings against a resume
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a JSON array of job postings
        #[arg(short, long)]
        jobs: PathBuf,

        /// Free-text career goals
        #[arg(short, long)]
        goals: Option<String>,

        /// Preferred job location (overrides the resume location)
        #[arg(long)]
        preferred_location: Option<String>,

        /// Preferred salary band
        #[arg(long)]
        preferred_salary: Option<String>,

        /// Hide results below this percentage
        #[arg(long)]
        min_score: Option<f64>,

        /// Only report postings found for this search role
        #[arg(long)]
        role: Option<String>,

        /// Only report postings at exactly this location
        #[arg(long)]
        location: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show per-factor scores
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the active motivation factors
    Factors,

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
