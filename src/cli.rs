//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Deterministic, explainable CV and job matching engine")]
#[command(
    long_about = "Score a candidate profile against job postings using transparent per-dimension rules: skills, experience, title, location, and profile completeness"
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
    /// Score a candidate against a batch of job postings
    Match {
        /// Path to the candidate profile (JSON)
        #[arg(short = 'p', long)]
        candidate: PathBuf,

        /// Path to the job postings file (JSON array)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Return redacted results (overall score only, no breakdown)
        #[arg(long)]
        redacted: bool,

        /// Show per-dimension sub-scores in console output
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Wall clock scoring budget in milliseconds; jobs not scored in
        /// time are dropped from the ranking
        #[arg(long)]
        budget_ms: Option<u64>,
    },

    /// Show how skill names normalize to their canonical form
    Normalize {
        /// Skill names to normalize
        #[arg(required = true)]
        skills: Vec<String>,
    },

    /// Show configuration
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
}

/// Parse output format string
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("candidate.json"), &["json"]).is_ok());
        assert!(validate_file_extension(Path::new("candidate.xml"), &["json"]).is_err());
        assert!(validate_file_extension(Path::new("candidate"), &["json"]).is_err());
    }
}
