//! Health score aggregation engine

use super::factors::{savings_rate, SubScores};
use super::persona::{Persona, PersonaWeights};
use crate::profile::FinancialProfile;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Points deducted when monthly expenses exceed income
pub const OVERSPEND_PENALTY: f64 = 10.0;

/// Final health score with the intermediates that produced it
#[derive(Debug, Clone, Serialize)]
pub struct HealthScoreResult {
    /// Aggregate score in [0,100]
    pub score: u8,
    pub persona: Persona,
    pub sub_scores: SubScores,
    pub weights: PersonaWeights,
    /// Savings rate in percent; -1 when income is non-positive
    pub savings_rate: f64,
}

/// Scores profiles against a fixed as-of date.
///
/// The as-of date only feeds age derivation; pinning it keeps the engine a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    as_of: NaiveDate,
}

impl ScoreEngine {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Compute the persona-weighted health score for one profile
    pub fn score_profile(&self, profile: &FinancialProfile) -> HealthScoreResult {
        let age = profile.age_on(self.as_of);
        let persona = Persona::classify(age, profile.dependents);
        let weights = persona.weights();

        let sub_scores = SubScores::for_profile(profile);
        let rate = savings_rate(profile.monthly_income, profile.monthly_expenses);

        let mut weighted = weights.weighted_total(&sub_scores);
        if rate < 0.0 {
            weighted -= OVERSPEND_PENALTY;
        }

        HealthScoreResult {
            score: weighted.clamp(0.0, 100.0).round() as u8,
            persona,
            sub_scores,
            weights,
            savings_rate: rate,
        }
    }
}

/// Score a profile as of today
pub fn compute_health_score(profile: &FinancialProfile) -> HealthScoreResult {
    ScoreEngine::new(Local::now().date_naive()).score_profile(profile)
}
