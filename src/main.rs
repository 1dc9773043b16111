//! Resume matcher: resume field extraction and weighted job matching

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::extraction::{parse_resume, ParsedProfile};
use resume_matcher::input::InputManager;
use resume_matcher::matching::{
    extract_career_goal_keywords, relevant_job_titles, JobMatcher, MatchFilter,
};
use resume_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use resume_matcher::output::report::MatchReport;
use resume_matcher::ResumeMatcherError;
use std::path::Path;
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Reset and path work on the config file even when it does not load
    if let Commands::Config {
        action: Some(action @ (ConfigAction::Reset | ConfigAction::Path)),
    } = &cli.command
    {
        if let Err(e) = manage_config_file(action, cli.config.as_deref()) {
            error!("Command failed: {:#}", e);
            process::exit(1);
        }
        return;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn manage_config_file(action: &ConfigAction, explicit: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(explicit);
    match action {
        ConfigAction::Reset => {
            println!("🔄 Resetting configuration to defaults...");
            Config::reset_at(&path)
                .with_context(|| format!("Could not reset config at {}", path.display()))?;
            println!("✅ Configuration reset successfully: {}", path.display());
        }
        ConfigAction::Path | ConfigAction::Show => println!("{}", path.display()),
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Could not load config from {}", path.display())),
        None => Config::load().context("Could not load default config"),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse { resume, output } => {
            let format = output_format(output.as_deref(), &config)?;
            let profile = read_profile(&resume).await?;

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.detailed,
                true,
                true,
            );
            println!("{}", generator.generate_profile(&profile, format)?);
        }

        Commands::Goals { text } => {
            let keywords = extract_career_goal_keywords(&text);
            if keywords.is_empty() {
                println!("No career goal keywords found.");
                return Ok(());
            }

            println!("🎯 Career goal keywords\n");
            print_group("Job titles", &keywords.job_titles);
            print_group("Locations", &keywords.locations);
            print_group("Work preferences", &keywords.work_preferences);
            print_group("Industries", &keywords.industries);
        }

        Commands::Titles { resume, goals } => {
            let mut profile = read_profile(&resume).await?;
            if let Some(goals) = goals {
                profile = profile.with_career_goals(goals);
            }

            let titles = relevant_job_titles(&profile);
            if titles.is_empty() {
                println!("No search titles could be generated for {}.", profile.name);
            }
            for title in titles {
                println!("  • {}", title);
            }
        }

        Commands::Match {
            resume,
            jobs,
            goals,
            preferred_location,
            preferred_salary,
            min_score,
            role,
            location,
            output,
            save,
            detailed,
        } => {
            let format = output_format(output.as_deref(), &config)?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Jobs file: {}", e)))?;

            let mut profile = read_profile(&resume).await?;
            if let Some(goals) = goals {
                profile = profile.with_career_goals(goals);
            }
            if let Some(location) = preferred_location {
                profile = profile.with_preferred_location(location);
            }
            if let Some(salary) = preferred_salary {
                profile = profile.with_preferred_salary(salary);
            }

            let postings = InputManager::new()
                .load_jobs(&jobs)
                .await
                .with_context(|| format!("Could not load job postings from {}", jobs.display()))?;

            let factors = config.factors().to_vec();
            let matcher = JobMatcher::new()?;
            let ranked = matcher.rank_jobs(&postings, &profile, &factors);

            let filter = MatchFilter {
                min_percentage: min_score.unwrap_or(config.matching.min_score),
                role,
                location,
            };
            let report = MatchReport::new(
                profile.name.clone(),
                relevant_job_titles(&profile),
                factors,
                ranked,
                &filter,
            );
            info!(
                "Reporting {} of {} postings",
                report.metadata.jobs_reported, report.metadata.jobs_scored
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Factors => {
            println!("⚖️  Motivation factors\n");
            let total: u32 = config.factors().iter().map(|f| f.weight).sum();
            for factor in config.factors() {
                let marker = if factor.is_known() { "" } else { " (custom, half credit)" };
                println!("  • {:<22} {:>2}{}", factor.name, factor.weight, marker);
            }
            println!("\nTotal weight: {}", total);
        }

        Commands::Config { .. } => {
            println!("⚙️  Current Configuration\n");
            println!("Minimum score: {:.0}%", config.matching.min_score);
            println!("Output format: {:?}", config.output.format);
            println!("Detailed: {}", config.output.detailed);
            println!("Colour output: {}", config.output.color_output);
            println!("\nFactors:");
            for factor in config.factors() {
                println!("  {}: {}", factor.name, factor.weight);
            }
        }
    }

    Ok(())
}

fn output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => Ok(cli::parse_output_format(format).map_err(ResumeMatcherError::InvalidInput)?),
        None => Ok(config.output.format),
    }
}

async fn read_profile(resume: &Path) -> Result<ParsedProfile> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| ResumeMatcherError::UnsupportedFormat(format!("Resume file: {}", e)))?;

    let text = InputManager::new()
        .extract_text(resume)
        .await
        .with_context(|| format!("Could not read resume {}", resume.display()))?;

    info!("Parsing resume: {}", resume.display());
    Ok(parse_resume(&text))
}

fn print_group<'a>(label: &str, values: impl IntoIterator<Item = &'a String>) {
    let values: Vec<&str> = values.into_iter().map(String::as_str).collect();
    if !values.is_empty() {
        println!("{}: {}", label, values.join(", "));
    }
}
