//! Match scoring engine
//!
//! Wires the normalizer, the five dimension scorers, the weighted
//! aggregator, the explainer and the ranker into one facade. Scoring a
//! single pair is a pure synchronous function; batch entry points fan the
//! per-job work out on the async runtime and re-assemble a deterministic
//! ranking.

pub mod explainer;
pub mod normalizer;
pub mod ranker;
pub mod scorers;
pub mod weights;

use crate::config::Config;
use crate::error::{JobMatcherError, Result};
use crate::model::{CandidateProfile, JobPosting, MatchResult};
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use ranker::RankedEntry;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

pub struct MatchEngine {
    config: Config,
}

impl MatchEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Score one candidate against one job with full detail.
    ///
    /// Pure given its inputs: `now` is passed in rather than read from the
    /// clock so a batch scores every job against the same reference date
    /// and repeated calls are byte-for-byte identical.
    pub fn score_job(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
        now: NaiveDate,
    ) -> MatchResult {
        score_pair(candidate, job, &self.config.scoring, now)
    }

    /// Score a candidate against a batch of jobs and return the top `limit`
    /// results, best first.
    ///
    /// Callers without the full-report entitlement get the same ranking with
    /// the per-dimension breakdown, skill lists and suggestions stripped;
    /// entitlement never changes which jobs surface or their order.
    pub async fn compute_matches(
        &self,
        candidate: &CandidateProfile,
        jobs: Vec<JobPosting>,
        limit: usize,
        entitled: bool,
    ) -> Result<Vec<MatchResult>> {
        self.compute_ranked(candidate, jobs, limit, entitled, None)
            .await
    }

    /// Like [`compute_matches`](Self::compute_matches) but bounded by a wall
    /// clock budget: jobs still unscored when the budget elapses are dropped
    /// and the ranking is built from the completed subset.
    pub async fn compute_matches_within(
        &self,
        candidate: &CandidateProfile,
        jobs: Vec<JobPosting>,
        limit: usize,
        entitled: bool,
        budget: Duration,
    ) -> Result<Vec<MatchResult>> {
        self.compute_ranked(candidate, jobs, limit, entitled, Some(budget))
            .await
    }

    async fn compute_ranked(
        &self,
        candidate: &CandidateProfile,
        jobs: Vec<JobPosting>,
        limit: usize,
        entitled: bool,
        budget: Option<Duration>,
    ) -> Result<Vec<MatchResult>> {
        if limit == 0 {
            return Err(JobMatcherError::InvalidInput(
                "result limit must be at least 1".to_string(),
            ));
        }
        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        // One reference date for the whole batch.
        let now = Local::now().date_naive();
        let total = jobs.len();
        debug!("Scoring candidate {} against {} jobs", candidate.id, total);

        let candidate = Arc::new(candidate.clone());
        let scoring = Arc::new(self.config.scoring.clone());

        let mut tasks = JoinSet::new();
        for job in jobs {
            let candidate = Arc::clone(&candidate);
            let scoring = Arc::clone(&scoring);
            tasks.spawn(async move {
                let posted_at = job.posted_at;
                let result = score_pair(&candidate, &job, &scoring, now);
                RankedEntry { result, posted_at }
            });
        }

        let deadline = budget.map(|b| tokio::time::Instant::now() + b);
        let mut entries = Vec::with_capacity(total);
        loop {
            let joined = match deadline {
                Some(deadline) => {
                    tokio::select! {
                        joined = tasks.join_next() => joined,
                        _ = tokio::time::sleep_until(deadline) => {
                            warn!(
                                "Scoring budget elapsed with {} of {} jobs unscored",
                                total - entries.len(),
                                total
                            );
                            tasks.abort_all();
                            break;
                        }
                    }
                }
                None => tasks.join_next().await,
            };

            match joined {
                Some(Ok(entry)) => entries.push(entry),
                Some(Err(err)) => {
                    return Err(JobMatcherError::Scoring(format!(
                        "scoring task failed: {}",
                        err
                    )))
                }
                None => break,
            }
        }

        let ranked = ranker::rank(entries, limit);
        debug!("Returning {} of {} scored jobs", ranked.len(), total);

        Ok(ranked
            .into_iter()
            .map(|r| if entitled { r } else { r.redacted() })
            .collect())
    }
}

fn score_pair(
    candidate: &CandidateProfile,
    job: &JobPosting,
    scoring: &crate::config::ScoringConfig,
    now: NaiveDate,
) -> MatchResult {
    let breakdown = scorers::score_breakdown(candidate, job, scoring, now);
    let match_score = weights::aggregate(&breakdown);
    let details = explainer::match_details(candidate, job);
    let suggestions = explainer::suggestions(&breakdown, &details, candidate, job, scoring);

    MatchResult {
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        match_score,
        breakdown: Some(breakdown),
        details: Some(details),
        suggestions,
    }
}
