//! Job posting snapshot consumed by the engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub required_skills: Vec<JobSkill>,
    /// Posting date, used only as a ranking tiebreak (newer first).
    #[serde(default)]
    pub posted_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSkill {
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// Expected years-of-experience band for the level. An open upper bound
    /// is expressed as `None`.
    pub fn expected_years(&self) -> (f64, Option<f64>) {
        match self {
            ExperienceLevel::Entry => (0.0, Some(2.0)),
            ExperienceLevel::Mid => (2.0, Some(5.0)),
            ExperienceLevel::Senior => (5.0, Some(10.0)),
            ExperienceLevel::Lead => (8.0, None),
        }
    }

    /// Lowercase display label, matching the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

impl JobPosting {
    /// Skills the job treats as hard requirements. When the posting marks
    /// nothing as required, every listed skill counts as required.
    pub fn required_skill_names(&self) -> Vec<&str> {
        let required: Vec<&str> = self
            .required_skills
            .iter()
            .filter(|s| s.is_required)
            .map(|s| s.name.as_str())
            .collect();

        if required.is_empty() {
            self.required_skills.iter().map(|s| s.name.as_str()).collect()
        } else {
            required
        }
    }

    /// Nice-to-have skills: listed but not required. Empty when the posting
    /// marks nothing as required, since then all skills are treated as required.
    pub fn optional_skill_names(&self) -> Vec<&str> {
        if self.required_skills.iter().any(|s| s.is_required) {
            self.required_skills
                .iter()
                .filter(|s| !s.is_required)
                .map(|s| s.name.as_str())
                .collect()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_skills(skills: Vec<(&str, bool)>) -> JobPosting {
        JobPosting {
            id: "j1".to_string(),
            title: "Backend Engineer".to_string(),
            experience_level: ExperienceLevel::Mid,
            location: None,
            is_remote: true,
            required_skills: skills
                .into_iter()
                .map(|(name, is_required)| JobSkill {
                    name: name.to_string(),
                    is_required,
                })
                .collect(),
            posted_at: None,
        }
    }

    #[test]
    fn test_required_skills_fall_back_to_all_when_none_flagged() {
        let job = job_with_skills(vec![("Rust", false), ("Postgres", false)]);
        assert_eq!(job.required_skill_names(), vec!["Rust", "Postgres"]);
        assert!(job.optional_skill_names().is_empty());
    }

    #[test]
    fn test_required_and_optional_split() {
        let job = job_with_skills(vec![("Rust", true), ("Kafka", false)]);
        assert_eq!(job.required_skill_names(), vec!["Rust"]);
        assert_eq!(job.optional_skill_names(), vec!["Kafka"]);
    }

    #[test]
    fn test_experience_bands() {
        assert_eq!(ExperienceLevel::Entry.expected_years(), (0.0, Some(2.0)));
        assert_eq!(ExperienceLevel::Lead.expected_years(), (8.0, None));
    }

    #[test]
    fn test_deserializes_wire_format() {
        let json = r#"{
            "id": "j9",
            "title": "Frontend Engineer",
            "experienceLevel": "mid",
            "isRemote": true,
            "requiredSkills": [
                {"name": "React", "isRequired": true},
                {"name": "TypeScript", "isRequired": true}
            ],
            "postedAt": "2025-11-02"
        }"#;

        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.experience_level, ExperienceLevel::Mid);
        assert!(job.location.is_none());
        assert_eq!(job.required_skill_names().len(), 2);
    }
}
