//! Life-stage persona classification and scoring weights
//!
//! The persona decides how much each wellness factor contributes to the
//! aggregate score. Weights are fixed percentage tables, one per persona,
//! and always sum to 100 so the weighted total lands on a 0-100 scale.

use super::factors::SubScores;
use serde::Serialize;

/// Age below which a dependent-free user counts as still accumulating
pub const YOUNG_AGE_LIMIT: i32 = 30;

/// Life-stage classification driving the weighting scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Persona {
    YoungAccumulator,
    FamilyBuilder,
    EstablishedProtector,
}

impl Persona {
    /// Classify from age and dependent count. First match wins:
    /// dependents, then age, then the established default.
    pub fn classify(age: i32, dependents: u32) -> Self {
        if dependents > 0 {
            Persona::FamilyBuilder
        } else if age < YOUNG_AGE_LIMIT {
            Persona::YoungAccumulator
        } else {
            Persona::EstablishedProtector
        }
    }

    /// The fixed weight table for this persona
    pub fn weights(&self) -> PersonaWeights {
        match self {
            Persona::YoungAccumulator => YOUNG_ACCUMULATOR_WEIGHTS,
            Persona::FamilyBuilder => FAMILY_BUILDER_WEIGHTS,
            Persona::EstablishedProtector => ESTABLISHED_PROTECTOR_WEIGHTS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Persona::YoungAccumulator => "Young Accumulator",
            Persona::FamilyBuilder => "Family Builder",
            Persona::EstablishedProtector => "Established Protector",
        }
    }
}

/// Percentage weights per wellness factor, summing to exactly 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonaWeights {
    pub savings: f64,
    pub emergency: f64,
    pub debt: f64,
    pub insurance: f64,
    pub investment: f64,
}

impl PersonaWeights {
    pub fn total(&self) -> f64 {
        self.savings + self.emergency + self.debt + self.insurance + self.investment
    }

    /// Weighted sum of the sub-scores, already on a 0-100 scale
    pub fn weighted_total(&self, scores: &SubScores) -> f64 {
        scores.savings * self.savings
            + scores.emergency * self.emergency
            + scores.debt * self.debt
            + scores.insurance * self.insurance
            + scores.investment * self.investment
    }
}

/// Growth phase: savings discipline and early investing dominate
pub const YOUNG_ACCUMULATOR_WEIGHTS: PersonaWeights = PersonaWeights {
    savings: 30.0,
    emergency: 20.0,
    debt: 20.0,
    insurance: 10.0,
    investment: 20.0,
};

/// Dependents at home: liquidity and insurance cover move to the front
pub const FAMILY_BUILDER_WEIGHTS: PersonaWeights = PersonaWeights {
    savings: 20.0,
    emergency: 30.0,
    debt: 15.0,
    insurance: 25.0,
    investment: 10.0,
};

/// Later career, no dependents: balanced protection posture
pub const ESTABLISHED_PROTECTOR_WEIGHTS: PersonaWeights = PersonaWeights {
    savings: 25.0,
    emergency: 25.0,
    debt: 20.0,
    insurance: 20.0,
    investment: 10.0,
};
