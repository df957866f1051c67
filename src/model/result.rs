//! Match results produced by the engine

use serde::{Deserialize, Serialize};

/// One scored candidate/job pairing. Computed fresh on every request and
/// immutable once returned; the engine never caches or persists these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: String,
    pub job_title: String,
    /// Weighted overall score, 0-100 inclusive.
    pub match_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MatchDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub suggestions: Vec<String>,
}

/// Per-dimension sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_score: u8,
    pub experience_score: u8,
    pub title_score: u8,
    pub location_score: u8,
    pub bonus_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Job skills (required or nice-to-have) the candidate covers, in the
    /// candidate's original spelling.
    pub matched_skills: Vec<String>,
    /// Required skills the candidate lacks, in the job's original casing.
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    /// Presentation-layer entitlement gate: strip the breakdown, skill
    /// details, and suggestions for callers without full access. The full
    /// computation always runs; callers only ever see less, never a
    /// differently scored result.
    pub fn redacted(mut self) -> Self {
        self.breakdown = None;
        self.details = None;
        self.suggestions.clear();
        self
    }

    pub fn is_redacted(&self) -> bool {
        self.breakdown.is_none() && self.details.is_none() && self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_result() -> MatchResult {
        MatchResult {
            job_id: "j1".to_string(),
            job_title: "Backend Engineer".to_string(),
            match_score: 82,
            breakdown: Some(ScoreBreakdown {
                skill_score: 100,
                experience_score: 70,
                title_score: 66,
                location_score: 100,
                bonus_score: 50,
            }),
            details: Some(MatchDetails {
                matched_skills: vec!["Rust".to_string()],
                missing_skills: vec![],
            }),
            suggestions: vec!["Align your headline with the job title".to_string()],
        }
    }

    #[test]
    fn test_redacted_keeps_score_only() {
        let redacted = full_result().redacted();

        assert_eq!(redacted.match_score, 82);
        assert_eq!(redacted.job_id, "j1");
        assert!(redacted.is_redacted());
    }

    #[test]
    fn test_redacted_serialization_omits_detail_fields() {
        let json = serde_json::to_string(&full_result().redacted()).unwrap();

        assert!(json.contains("matchScore"));
        assert!(!json.contains("breakdown"));
        assert!(!json.contains("details"));
        assert!(!json.contains("suggestions"));
    }

    #[test]
    fn test_full_serialization_includes_breakdown() {
        let json = serde_json::to_string(&full_result()).unwrap();

        assert!(json.contains("skillScore"));
        assert!(json.contains("matchedSkills"));
        assert!(json.contains("missingSkills"));
    }
}
