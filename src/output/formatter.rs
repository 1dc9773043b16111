//! Output formatters for match reports and parsed profiles

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::extraction::ParsedProfile;
use crate::matching::{MatchCategory, RankedJob};
use crate::output::report::MatchReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports in one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn format_profile(&self, profile: &ParsedProfile) -> Result<String>;
}

/// Terminal output with optional colours
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_category_badge(&self, category: MatchCategory) -> String {
        let color = match category {
            MatchCategory::Excellent => Color::Green,
            MatchCategory::Good => Color::BrightGreen,
            MatchCategory::Moderate => Color::Yellow,
            MatchCategory::Low => Color::Red,
        };
        let badge = category.to_string().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_ranked_job(&self, index: usize, ranked: &RankedJob) -> String {
        let job = &ranked.job;
        let result = &ranked.result;
        let mut output = format!(
            "{:>2}. {} {:.1}%  {} | {} ({})\n",
            index,
            self.format_category_badge(result.match_category),
            result.percentage_score,
            self.colorize(&job.title, Color::Cyan),
            job.company_name,
            job.location
        );

        if self.detailed {
            for factor in &result.factor_scores {
                output.push_str(&format!(
                    "      {:<22} {:>5.2} / {}\n",
                    factor.name, factor.score, factor.weight
                ));
            }
            output.push_str(&format!("      Type: {} | Role: {}\n", job.job_type, job.role));
            output.push_str(&format!("      Apply: {}\n", job.apply_link));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 JOB MATCH REPORT", 1));
        output.push_str(&format!(
            "Candidate: {} | Generated: {}\n",
            report.candidate,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Search Titles", 2));
        if report.search_titles.is_empty() {
            output.push_str("  (none)\n");
        }
        for title in &report.search_titles {
            output.push_str(&format!("  • {}\n", title));
        }

        output.push_str(&self.format_header("Motivation Factors", 2));
        for factor in &report.factors {
            output.push_str(&format!("  • {} (weight {})\n", factor.name, factor.weight));
        }

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Reported {} of {} jobs (minimum {:.0}%)\n",
            report.metadata.jobs_reported, report.metadata.jobs_scored, report.metadata.min_percentage
        ));
        for category in MatchCategory::ALL {
            output.push_str(&format!(
                "  {} {}\n",
                self.format_category_badge(category),
                report.summary.count(category)
            ));
        }
        if !report.results.is_empty() {
            output.push_str(&format!(
                "Average: {:.1}% | Top: {:.1}%\n",
                report.summary.average_percentage, report.summary.top_percentage
            ));
        }

        output.push_str(&self.format_header("Ranked Jobs", 2));
        if report.results.is_empty() {
            output.push_str(&self.colorize("No jobs matched the current filter.\n", Color::Yellow));
        }
        for (i, ranked) in report.results.iter().enumerate() {
            output.push_str(&self.format_ranked_job(i + 1, ranked));
        }

        Ok(output)
    }

    fn format_profile(&self, profile: &ParsedProfile) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 PARSED RESUME", 1));
        output.push_str(&format!("Name:     {}\n", self.colorize(&profile.name, Color::Cyan)));
        output.push_str(&format!("Email:    {}\n", profile.email));
        output.push_str(&format!("Phone:    {}\n", profile.phone));
        output.push_str(&format!("Location: {}\n", profile.location));
        output.push_str(&format!("Experience: {}\n", profile.experience));

        output.push_str(&self.format_header("Skills", 2));
        if profile.skills.is_empty() {
            output.push_str("  (none found)\n");
        } else {
            let skills: Vec<&str> = profile.skills.iter().map(String::as_str).collect();
            output.push_str(&format!("  {}\n", skills.join(", ")));
        }

        output.push_str(&self.format_header("Languages", 2));
        output.push_str(&format!("  {}\n", profile.languages.join(", ")));

        output.push_str(&self.format_header("Qualifications", 2));
        for qualification in &profile.qualifications {
            output.push_str(&format!("  • {}\n", qualification));
        }

        output.push_str(&self.format_header("Employment History", 2));
        for entry in &profile.employment_history {
            output.push_str(&format!("  • {}\n", entry));
        }

        output.push_str(&self.format_header("Profile Summary", 2));
        output.push_str(&format!("{}\n", profile.profile_summary));

        if let Some(goals) = &profile.career_goals {
            output.push_str(&self.format_header("Career Goals", 3));
            output.push_str(&format!("{}\n", goals));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_profile(&self, profile: &ParsedProfile) -> Result<String> {
        self.to_json(profile)
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_category_badge(category: MatchCategory) -> &'static str {
        match category {
            MatchCategory::Excellent => "🟢 Excellent",
            MatchCategory::Good => "🟡 Good",
            MatchCategory::Moderate => "🟠 Moderate",
            MatchCategory::Low => "🔴 Low",
        }
    }

    /// Pipes would otherwise split a table cell.
    fn cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 🎯 Job Match Report: {}\n\n", report.candidate));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Jobs reported:** {} of {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.jobs_reported,
                report.metadata.jobs_scored
            ));
        }

        if !report.search_titles.is_empty() {
            output.push_str("## Search Titles\n\n");
            for title in &report.search_titles {
                output.push_str(&format!("- {}\n", title));
            }
            output.push('\n');
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Category | Jobs |\n");
        output.push_str("|----------|------|\n");
        for category in MatchCategory::ALL {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::markdown_category_badge(category),
                report.summary.count(category)
            ));
        }
        output.push('\n');
        if !report.results.is_empty() {
            output.push_str(&format!(
                "**Average:** {:.1}% | **Top:** {:.1}%\n\n",
                report.summary.average_percentage, report.summary.top_percentage
            ));
        }

        output.push_str("## Ranked Jobs\n\n");
        output.push_str("| # | Score | Category | Title | Company | Location |\n");
        output.push_str("|---|-------|----------|-------|---------|----------|\n");
        for (i, ranked) in report.results.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {:.1}% | {} | {} | {} | {} |\n",
                i + 1,
                ranked.result.percentage_score,
                ranked.result.match_category,
                Self::cell(&ranked.job.title),
                Self::cell(&ranked.job.company_name),
                Self::cell(&ranked.job.location)
            ));
        }
        output.push('\n');

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Matcher v{}*\n",
                report.metadata.version
            ));
        }

        Ok(output)
    }

    fn format_profile(&self, profile: &ParsedProfile) -> Result<String> {
        let mut output = format!("# {}\n\n", profile.name);

        output.push_str(&format!(
            "**Email:** {} | **Phone:** {} | **Location:** {}\n\n",
            profile.email, profile.phone, profile.location
        ));
        output.push_str(&format!("**Experience:** {}\n\n", profile.experience));

        output.push_str("## Skills\n\n");
        for skill in &profile.skills {
            output.push_str(&format!("- {}\n", skill));
        }
        output.push_str("\n## Languages\n\n");
        for language in &profile.languages {
            output.push_str(&format!("- {}\n", language));
        }
        output.push_str("\n## Qualifications\n\n");
        for qualification in &profile.qualifications {
            output.push_str(&format!("- {}\n", qualification));
        }
        output.push_str("\n## Employment History\n\n");
        for entry in &profile.employment_history {
            output.push_str(&format!("- {}\n", entry));
        }
        output.push_str(&format!("\n## Profile Summary\n\n{}\n", profile.profile_summary));

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_profile(&self, profile: &ParsedProfile, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_profile(profile)
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if file_path.is_dir() {
        return Err(ResumeMatcherError::OutputFormatting(format!(
            "Cannot write report over a directory: {}",
            file_path.display()
        )));
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
