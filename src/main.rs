//! Job matcher: deterministic CV and job matching with explainable scores

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::{Config, OutputFormat};
use job_matcher::engine::{normalizer, weights, MatchEngine};
use job_matcher::error::{JobMatcherError, Result};
use job_matcher::model::{CandidateProfile, JobPosting};
use job_matcher::output::{save_results_to_file, ConsoleFormatter, JsonFormatter, OutputFormatter};
use log::{error, info};
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            candidate,
            jobs,
            limit,
            redacted,
            detailed,
            output,
            save,
            budget_ms,
        } => {
            info!("Starting match scoring");

            cli::validate_file_extension(&candidate, &["json"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Candidate file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Jobs file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;

            let candidate_profile = load_candidate(&candidate).await?;
            let job_postings = load_jobs(&jobs).await?;
            info!(
                "Loaded candidate {} and {} job postings",
                candidate_profile.id,
                job_postings.len()
            );

            let limit = limit.unwrap_or(config.scoring.default_limit);
            let detailed = detailed || config.output.detailed;
            let engine = MatchEngine::new(config.clone());

            let results = match budget_ms {
                Some(ms) => {
                    engine
                        .compute_matches_within(
                            &candidate_profile,
                            job_postings,
                            limit,
                            !redacted,
                            Duration::from_millis(ms),
                        )
                        .await?
                }
                None => {
                    engine
                        .compute_matches(&candidate_profile, job_postings, limit, !redacted)
                        .await?
                }
            };

            let formatter: Box<dyn OutputFormatter> = match output_format {
                OutputFormat::Console => {
                    Box::new(ConsoleFormatter::new(config.output.color_output, detailed))
                }
                OutputFormat::Json => Box::new(JsonFormatter::new(true)),
            };
            let rendered = formatter.format_results(&results)?;
            println!("{}", rendered);

            if let Some(path) = save {
                save_results_to_file(&rendered, &path)?;
                println!("💾 Results saved to: {}", path.display());
            }
        }

        Commands::Normalize { skills } => {
            for skill in skills {
                println!("{} -> {}", skill, normalizer::normalize(&skill));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("\nScoring Weights:");
                println!("  Skills: {:.1}%", weights::MATCH_WEIGHTS.skills * 100.0);
                println!(
                    "  Experience: {:.1}%",
                    weights::MATCH_WEIGHTS.experience * 100.0
                );
                println!("  Title: {:.1}%", weights::MATCH_WEIGHTS.title * 100.0);
                println!("  Location: {:.1}%", weights::MATCH_WEIGHTS.location * 100.0);
                println!("  Bonus: {:.1}%", weights::MATCH_WEIGHTS.bonus * 100.0);
                println!("\nScoring Policy:");
                println!(
                    "  Nice-to-have bonus cap: {}",
                    config.scoring.nice_to_have_bonus
                );
                println!("  Suggestion limit: {}", config.scoring.suggestion_limit);
                println!("  Default result limit: {}", config.scoring.default_limit);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

async fn load_candidate(path: &Path) -> Result<CandidateProfile> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| {
        JobMatcherError::InvalidInput(format!("Invalid candidate profile {}: {}", path.display(), e))
    })
}

async fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| {
        JobMatcherError::InvalidInput(format!("Invalid job postings {}: {}", path.display(), e))
    })
}
