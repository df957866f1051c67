//! Integration tests for the job matcher

use job_matcher::config::Config;
use job_matcher::engine::MatchEngine;
use job_matcher::model::{CandidateProfile, JobPosting};
use job_matcher::output::{JsonFormatter, OutputFormatter};
use std::time::Duration;

fn load_candidate() -> CandidateProfile {
    let content = std::fs::read_to_string("tests/fixtures/candidate.json").unwrap();
    serde_json::from_str(&content).unwrap()
}

fn load_jobs() -> Vec<JobPosting> {
    let content = std::fs::read_to_string("tests/fixtures/jobs.json").unwrap();
    serde_json::from_str(&content).unwrap()
}

fn engine() -> MatchEngine {
    MatchEngine::new(Config::default())
}

#[test]
fn test_frontend_scenario_scores_as_expected() {
    let candidate = load_candidate();
    let jobs = load_jobs();
    let job = jobs.iter().find(|j| j.id == "job-frontend").unwrap();

    // Fixed reference date: exactly three years into the current role.
    let now = "2025-06-01".parse().unwrap();
    let result = engine().score_job(&candidate, job, now);

    let breakdown = result.breakdown.unwrap();
    assert_eq!(breakdown.skill_score, 50);
    assert_eq!(breakdown.experience_score, 100);
    assert!(breakdown.title_score >= 80);
    assert_eq!(breakdown.location_score, 100);

    let details = result.details.unwrap();
    assert_eq!(details.matched_skills, vec!["React"]);
    assert_eq!(details.missing_skills, vec!["TypeScript"]);

    assert!(
        result.suggestions.iter().any(|s| s.contains("TypeScript")),
        "expected a suggestion naming TypeScript, got {:?}",
        result.suggestions
    );
}

#[tokio::test]
async fn test_batch_ranking_end_to_end() {
    let results = engine()
        .compute_matches(&load_candidate(), load_jobs(), 10, true)
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    // Frontend is the clear best fit, backend the clear worst.
    assert_eq!(results[0].job_id, "job-frontend");
    assert_eq!(results[2].job_id, "job-backend");
    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
}

#[tokio::test]
async fn test_batch_ranking_is_deterministic() {
    let engine = engine();
    let first = engine
        .compute_matches(&load_candidate(), load_jobs(), 10, true)
        .await
        .unwrap();
    let second = engine
        .compute_matches(&load_candidate(), load_jobs(), 10, true)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_limit_truncates_after_ranking() {
    let results = engine()
        .compute_matches(&load_candidate(), load_jobs(), 1, true)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].job_id, "job-frontend");
}

#[tokio::test]
async fn test_redacted_results_keep_the_same_ranking() {
    let engine = engine();
    let full = engine
        .compute_matches(&load_candidate(), load_jobs(), 10, true)
        .await
        .unwrap();
    let redacted = engine
        .compute_matches(&load_candidate(), load_jobs(), 10, false)
        .await
        .unwrap();

    for (full, redacted) in full.iter().zip(&redacted) {
        assert_eq!(full.job_id, redacted.job_id);
        assert_eq!(full.match_score, redacted.match_score);
        assert!(redacted.is_redacted());
    }
}

#[tokio::test]
async fn test_zero_limit_is_an_input_error() {
    let result = engine()
        .compute_matches(&load_candidate(), load_jobs(), 0, true)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_generous_budget_scores_every_job() {
    let results = engine()
        .compute_matches_within(
            &load_candidate(),
            load_jobs(),
            10,
            true,
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_json_output_uses_wire_field_names() {
    let results = engine()
        .compute_matches(&load_candidate(), load_jobs(), 10, true)
        .await
        .unwrap();

    let json = JsonFormatter::new(true).format_results(&results).unwrap();
    assert!(json.contains("\"jobId\""));
    assert!(json.contains("\"matchScore\""));
    assert!(json.contains("\"matchedSkills\""));
}
