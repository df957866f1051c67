//! Output formatters for match results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::MatchResult;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a ranked list of match results.
pub trait OutputFormatter {
    fn format_results(&self, results: &[MatchResult]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and per-dimension detail.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            60..=74 => ("GOOD", Color::Yellow),
            40..=59 => ("PARTIAL", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_result(&self, rank: usize, result: &MatchResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:>3}. {} ({})  {}% {}\n",
            rank,
            self.colorize(&result.job_title, Color::Cyan),
            result.job_id,
            result.match_score,
            self.format_score_badge(result.match_score)
        ));

        if let Some(breakdown) = result.breakdown.as_ref().filter(|_| self.detailed) {
            output.push_str(&format!(
                "     skills {}%  experience {}%  title {}%  location {}%  bonus {}%\n",
                breakdown.skill_score,
                breakdown.experience_score,
                breakdown.title_score,
                breakdown.location_score,
                breakdown.bonus_score
            ));
        }

        if let Some(details) = &result.details {
            if !details.matched_skills.is_empty() {
                output.push_str(&format!(
                    "     {} {}\n",
                    self.colorize("matched:", Color::Green),
                    details.matched_skills.join(", ")
                ));
            }
            if !details.missing_skills.is_empty() {
                output.push_str(&format!(
                    "     {} {}\n",
                    self.colorize("missing:", Color::Red),
                    details.missing_skills.join(", ")
                ));
            }
        }

        for suggestion in &result.suggestions {
            output.push_str(&format!(
                "     {} {}\n",
                self.colorize("tip:", Color::Yellow),
                suggestion
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, results: &[MatchResult]) -> Result<String> {
        if results.is_empty() {
            return Ok("No matching jobs found.\n".to_string());
        }

        let mut output = String::new();
        let header = format!("Top {} job matches", results.len());
        if self.use_colors {
            output.push_str(&format!("{}\n\n", header.blue().bold()));
        } else {
            output.push_str(&format!("{}\n\n", header));
        }

        for (index, result) in results.iter().enumerate() {
            output.push_str(&self.format_result(index + 1, result));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, results: &[MatchResult]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(results)?)
        } else {
            Ok(serde_json::to_string(results)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Save rendered output to a file.
pub fn save_results_to_file(content: &str, file_path: &Path) -> Result<()> {
    std::fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchDetails, ScoreBreakdown};

    fn sample_result() -> MatchResult {
        MatchResult {
            job_id: "j1".to_string(),
            job_title: "Frontend Engineer".to_string(),
            match_score: 82,
            breakdown: Some(ScoreBreakdown {
                skill_score: 50,
                experience_score: 100,
                title_score: 100,
                location_score: 100,
                bonus_score: 75,
            }),
            details: Some(MatchDetails {
                matched_skills: vec!["React".to_string()],
                missing_skills: vec!["TypeScript".to_string()],
            }),
            suggestions: vec!["Add the required skills you are missing, starting with TypeScript"
                .to_string()],
        }
    }

    #[test]
    fn test_console_output_lists_every_result() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_results(&[sample_result()]).unwrap();

        assert!(output.contains("Frontend Engineer"));
        assert!(output.contains("82%"));
        assert!(output.contains("skills 50%"));
        assert!(output.contains("missing: TypeScript"));
    }

    #[test]
    fn test_console_output_for_empty_results() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_results(&[]).unwrap();

        assert!(output.contains("No matching jobs"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = JsonFormatter::new(true);
        let output = formatter.format_results(&[sample_result()]).unwrap();

        let parsed: Vec<MatchResult> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].job_id, "j1");
    }

    #[test]
    fn test_redacted_json_omits_detail_fields() {
        let formatter = JsonFormatter::new(false);
        let output = formatter
            .format_results(&[sample_result().redacted()])
            .unwrap();

        assert!(!output.contains("breakdown"));
        assert!(!output.contains("suggestions"));
        assert!(output.contains("matchScore"));
    }
}
