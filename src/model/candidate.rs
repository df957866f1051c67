//! Candidate profile snapshot consumed by the engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only candidate snapshot. Skill names are free text and may carry
/// duplicates, casing differences, or synonyms; normalization happens inside
/// the engine, never on this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub skills: Vec<CandidateSkill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub position: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
}

impl CandidateProfile {
    /// Most recent position title, falling back to the headline.
    ///
    /// Experiences are not guaranteed to arrive sorted; a current position
    /// wins, otherwise the latest start date does.
    pub fn current_title(&self) -> Option<&str> {
        let latest = self
            .experiences
            .iter()
            .max_by_key(|e| (e.is_current, e.start_date));

        match latest {
            Some(e) if !e.position.trim().is_empty() => Some(e.position.as_str()),
            _ => self
                .headline
                .as_deref()
                .filter(|h| !h.trim().is_empty()),
        }
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }
}
