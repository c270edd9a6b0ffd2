//! Deterministic financial wellness engine
//!
//! Computes two derived assessments from a user's financial profile: a
//! persona-weighted financial health score (0-100) and a comparison of the
//! old and new income-tax regimes, plus progress arithmetic for savings
//! goals. The engine performs no I/O; hosts supply a structured profile
//! and render the structured results.

pub mod currency;
pub mod profile;
pub mod score;
pub mod tax;

pub use currency::format_inr;
pub use profile::{FinancialProfile, Goal, ProfileState};
pub use score::{
    compute_health_score, goal_progress, GoalProgress, HealthScoreResult, Persona, ScoreEngine,
    SubScores,
};
pub use tax::{compare_regimes, DeductionSet, Regime, TaxComparison, TaxInputs};
