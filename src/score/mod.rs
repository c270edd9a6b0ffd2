//! Wellness scoring: persona classification, sub-scores, and aggregation

mod engine;
mod factors;
mod goals;
mod persona;

pub use engine::{compute_health_score, HealthScoreResult, ScoreEngine, OVERSPEND_PENALTY};
pub use factors::{
    debt_score, emergency_score, insurance_score, investment_score, savings_rate, savings_score,
    SubScores,
};
pub use goals::{goal_progress, GoalProgress, GoalStatus};
pub use persona::{Persona, PersonaWeights, YOUNG_AGE_LIMIT};
