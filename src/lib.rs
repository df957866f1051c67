//! Job matcher library

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod output;

pub use config::Config;
pub use engine::MatchEngine;
pub use error::{JobMatcherError, Result};
pub use model::{CandidateProfile, JobPosting, MatchResult};
