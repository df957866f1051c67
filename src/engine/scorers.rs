//! The five dimension scorers
//!
//! Every scorer is a total function from a candidate/job pair to an integer
//! in 0..=100. Missing optional data resolves to a documented neutral or
//! zero default; incomplete profiles are the common case, not an error.

use crate::config::ScoringConfig;
use crate::engine::normalizer::{self, normalize_role_token};
use crate::model::{CandidateProfile, ExperienceLevel, JobPosting, ScoreBreakdown};
use chrono::NaiveDate;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

/// Run all five scorers for one candidate/job pair. `now` is captured once
/// per batch by the caller so a single ranking pass stays internally
/// consistent.
pub fn score_breakdown(
    candidate: &CandidateProfile,
    job: &JobPosting,
    config: &ScoringConfig,
    now: NaiveDate,
) -> ScoreBreakdown {
    ScoreBreakdown {
        skill_score: skill_score(candidate, job, config),
        experience_score: experience_score(candidate, job.experience_level, now),
        title_score: title_score(candidate, job, config.title_fuzzy_threshold),
        location_score: location_score(candidate, job),
        bonus_score: bonus_score(candidate),
    }
}

/// Required-skill coverage plus a small nice-to-have bonus.
///
/// A job with no required skills scores 100: there is no constraint to fail.
pub fn skill_score(candidate: &CandidateProfile, job: &JobPosting, config: &ScoringConfig) -> u8 {
    let required = normalizer::normalize_set(job.required_skill_names());
    let possessed = normalizer::normalize_set(candidate.skill_names());

    if required.is_empty() {
        return 100;
    }

    let matched = required.intersection(&possessed).count();
    let base = 100.0 * matched as f64 / required.len() as f64;

    let optional = normalizer::normalize_set(job.optional_skill_names());
    let bonus = if optional.is_empty() {
        0.0
    } else {
        let matched_optional = optional.intersection(&possessed).count();
        f64::from(config.nice_to_have_bonus) * matched_optional as f64 / optional.len() as f64
    };

    (base + bonus).round().clamp(0.0, 100.0) as u8
}

/// Fit of the candidate's total years of experience against the job level's
/// expected band. Full score inside the band, linear decay outside it:
/// 30 points per missing year, 15 per surplus year (over-qualification is
/// penalized, but half as harshly as under-qualification).
pub fn experience_score(
    candidate: &CandidateProfile,
    level: ExperienceLevel,
    now: NaiveDate,
) -> u8 {
    let years = total_experience_years(candidate, now);
    let (min_years, max_years) = level.expected_years();

    let penalty = if years < min_years {
        (min_years - years) * 30.0
    } else if let Some(max) = max_years.filter(|max| years > *max) {
        (years - max) * 15.0
    } else {
        return 100;
    };

    (100.0 - penalty).round().clamp(0.0, 100.0) as u8
}

/// Total years of experience from merged, non-overlapping intervals.
/// Ongoing roles (`is_current` or absent end date) run until `now`;
/// an end date before the start collapses the interval to zero length
/// rather than corrupting the total.
pub fn total_experience_years(candidate: &CandidateProfile, now: NaiveDate) -> f64 {
    let mut intervals: Vec<(NaiveDate, NaiveDate)> = candidate
        .experiences
        .iter()
        .filter_map(|e| {
            // Roles dated entirely in the future contribute nothing.
            if e.start_date > now {
                return None;
            }
            let end = if e.is_current {
                now
            } else {
                e.end_date.unwrap_or(now)
            };
            (end >= e.start_date).then_some((e.start_date, end.min(now)))
        })
        .collect();

    intervals.sort();

    let mut total_days = 0i64;
    let mut cursor: Option<(NaiveDate, NaiveDate)> = None;
    for (start, end) in intervals {
        match cursor {
            Some((cur_start, cur_end)) if start <= cur_end => {
                cursor = Some((cur_start, cur_end.max(end)));
            }
            Some((cur_start, cur_end)) => {
                total_days += (cur_end - cur_start).num_days();
                cursor = Some((start, end));
            }
            None => cursor = Some((start, end)),
        }
    }
    if let Some((start, end)) = cursor {
        total_days += (end - start).num_days();
    }

    total_days as f64 / 365.25
}

/// Token-overlap similarity between the candidate's most recent title and
/// the job title: Jaccard over lowercased word tokens after role-synonym
/// mapping, with fuzzy token equality to absorb typos. Symmetric in token
/// order by construction. A candidate with no title at all scores a
/// neutral 50.
pub fn title_score(candidate: &CandidateProfile, job: &JobPosting, fuzzy_threshold: f64) -> u8 {
    let Some(candidate_title) = candidate.current_title() else {
        return 50;
    };

    if candidate_title.trim().eq_ignore_ascii_case(job.title.trim()) {
        return 100;
    }

    let candidate_tokens = title_tokens(candidate_title);
    let job_tokens = title_tokens(&job.title);
    if candidate_tokens.is_empty() || job_tokens.is_empty() {
        return 50;
    }

    let mut matched = 0usize;
    let mut unmatched_job: Vec<&String> = job_tokens.iter().collect();
    for token in &candidate_tokens {
        if let Some(pos) = unmatched_job
            .iter()
            .position(|j| *j == token || jaro_winkler(token, j) >= fuzzy_threshold)
        {
            unmatched_job.remove(pos);
            matched += 1;
        }
    }

    let union = candidate_tokens.len() + job_tokens.len() - matched;
    (100.0 * matched as f64 / union as f64).round() as u8
}

/// Sorted, deduplicated tokens. The greedy fuzzy matching above walks these
/// in order, so token order must not depend on hash state.
fn title_tokens(title: &str) -> Vec<String> {
    let mut tokens: Vec<String> = title
        .unicode_words()
        .map(|w| normalize_role_token(&w.to_lowercase()).to_string())
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens
}

/// Location compatibility. Remote jobs, candidates without a stated location,
/// and jobs without one all score 100 (benefit of the doubt); otherwise an
/// exact or substring match scores 100, a shared trailing region segment
/// (comma-split, typically the country) 50, anything else 0.
pub fn location_score(candidate: &CandidateProfile, job: &JobPosting) -> u8 {
    if job.is_remote {
        return 100;
    }

    let candidate_loc = match candidate.address.as_deref().map(str::trim) {
        Some(loc) if !loc.is_empty() => loc.to_lowercase(),
        _ => return 100,
    };
    let job_loc = match job.location.as_deref().map(str::trim) {
        Some(loc) if !loc.is_empty() => loc.to_lowercase(),
        _ => return 100,
    };

    if candidate_loc.contains(&job_loc) || job_loc.contains(&candidate_loc) {
        return 100;
    }

    let candidate_region = candidate_loc.rsplit(',').next().map(str::trim);
    let job_region = job_loc.rsplit(',').next().map(str::trim);
    if candidate_region.is_some() && candidate_region == job_region {
        return 50;
    }

    0
}

/// Profile-completeness bonus: minor signals only, never the primary driver
/// of the overall score. Baseline 50, small deltas per filled-in facet.
pub fn bonus_score(candidate: &CandidateProfile) -> u8 {
    let mut score = 50u32;

    if candidate
        .headline
        .as_deref()
        .is_some_and(|h| !h.trim().is_empty())
    {
        score += 10;
    }
    if !candidate.experiences.is_empty() {
        score += 15;
    }
    if candidate.skills.len() >= 3 {
        score += 15;
    }
    if candidate
        .address
        .as_deref()
        .is_some_and(|a| !a.trim().is_empty())
    {
        score += 10;
    }

    score.min(100) as u8
}
