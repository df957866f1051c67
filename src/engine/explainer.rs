//! Human-readable explanations for a scored match
//!
//! Produces the matched/missing skill lists and a short, deterministic set
//! of improvement suggestions ordered from the weakest dimension up.

use crate::config::ScoringConfig;
use crate::engine::normalizer;
use crate::model::{CandidateProfile, JobPosting, MatchDetails, ScoreBreakdown};
use std::collections::{HashMap, HashSet};

/// Which of the job's skills (required and nice-to-have) the candidate
/// covers, and which required skills are missing.
///
/// Matched skills display in the candidate's original spelling, missing
/// skills in the job posting's; normalization happens only on the comparison
/// side. Both lists are deduplicated by normalized form and sorted so
/// repeated runs over the same pair produce identical output.
pub fn match_details(candidate: &CandidateProfile, job: &JobPosting) -> MatchDetails {
    // Canonical form -> the candidate's own spelling, first listing wins.
    let mut possessed: HashMap<String, &str> = HashMap::new();
    for name in candidate.skill_names() {
        let canonical = normalizer::normalize(name);
        if !canonical.is_empty() {
            possessed.entry(canonical).or_insert(name);
        }
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for name in job.required_skill_names() {
        let canonical = normalizer::normalize(name);
        if canonical.is_empty() || !seen.insert(canonical.clone()) {
            continue;
        }
        match possessed.get(&canonical) {
            Some(original) => matched.push((*original).to_string()),
            None => missing.push(name.to_string()),
        }
    }

    // Covered nice-to-haves count as matches too; uncovered ones are not
    // reported missing since the job does not require them.
    for name in job.optional_skill_names() {
        let canonical = normalizer::normalize(name);
        if canonical.is_empty() || !seen.insert(canonical.clone()) {
            continue;
        }
        if let Some(original) = possessed.get(&canonical) {
            matched.push((*original).to_string());
        }
    }

    matched.sort_by_key(|s| s.to_lowercase());
    missing.sort_by_key(|s| s.to_lowercase());

    MatchDetails {
        matched_skills: matched,
        missing_skills: missing,
    }
}

/// Improvement suggestions, weakest dimension first.
///
/// The skills dimension uses its own (stricter) threshold since it carries
/// the largest weight; ties between equally weak dimensions break on a fixed
/// dimension order so output stays deterministic.
pub fn suggestions(
    breakdown: &ScoreBreakdown,
    details: &MatchDetails,
    candidate: &CandidateProfile,
    job: &JobPosting,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut flagged: Vec<(u8, usize, String)> = Vec::new();

    if breakdown.skill_score < config.skill_suggestion_threshold {
        if let Some(text) = skill_suggestion(&details.missing_skills) {
            flagged.push((breakdown.skill_score, 0, text));
        }
    }
    if breakdown.experience_score < config.dimension_suggestion_threshold {
        flagged.push((
            breakdown.experience_score,
            1,
            format!(
                "Your experience does not line up with a {} level role yet; highlight the most relevant roles you have held",
                job.experience_level.label()
            ),
        ));
    }
    if breakdown.title_score < config.dimension_suggestion_threshold {
        flagged.push((
            breakdown.title_score,
            2,
            format!(
                "Your current title reads quite differently from \"{}\"; consider updating your headline to reflect this kind of role",
                job.title
            ),
        ));
    }
    if breakdown.location_score < config.dimension_suggestion_threshold {
        let text = match job.location.as_deref() {
            Some(location) => format!(
                "This role is based in {}; add a relocation note or look for remote openings",
                location
            ),
            None => "Add a location to your profile so on-site roles can be matched".to_string(),
        };
        flagged.push((breakdown.location_score, 3, text));
    }
    // Completeness is keyed off the profile facets themselves rather than
    // the bonus sub-score, whose baseline never drops below 50.
    if let Some(text) = completeness_suggestion(candidate) {
        flagged.push((breakdown.bonus_score, 4, text));
    }

    flagged.sort_by_key(|(score, order, _)| (*score, *order));
    flagged
        .into_iter()
        .take(config.suggestion_limit)
        .map(|(_, _, text)| text)
        .collect()
}

fn completeness_suggestion(candidate: &CandidateProfile) -> Option<String> {
    let mut missing_facets = Vec::new();

    if !candidate
        .headline
        .as_deref()
        .is_some_and(|h| !h.trim().is_empty())
    {
        missing_facets.push("a headline");
    }
    if candidate.experiences.is_empty() {
        missing_facets.push("your work history");
    }
    if candidate.skills.len() < 3 {
        missing_facets.push("a few listed skills");
    }
    if !candidate
        .address
        .as_deref()
        .is_some_and(|a| !a.trim().is_empty())
    {
        missing_facets.push("a location");
    }

    if missing_facets.is_empty() {
        return None;
    }
    Some(format!(
        "Complete your profile: add {}",
        missing_facets.join(", ")
    ))
}

fn skill_suggestion(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    let named: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
    Some(format!(
        "Add the required skills you are missing, starting with {}",
        named.join(", ")
    ))
}
