//! Plain-data types exchanged with the surrounding application
//!
//! Candidate profiles and job postings arrive fully materialized from the
//! data-access layer; the engine never fetches or persists anything itself.

pub mod candidate;
pub mod job;
pub mod result;

pub use candidate::{CandidateProfile, CandidateSkill, Experience, SkillLevel};
pub use job::{ExperienceLevel, JobPosting, JobSkill};
pub use result::{MatchDetails, MatchResult, ScoreBreakdown};
