//! Wellness sub-score calculators
//!
//! Five independent factors, each normalized to [0,1]. Ratio denominators
//! are guarded: a profile with zero income or zero expenses still produces
//! a score, it never divides by zero.

use crate::profile::FinancialProfile;
use serde::Serialize;

/// Months of cover assumed when there are no expenses to cover
const FULL_COVERAGE_MONTHS: f64 = 12.0;

/// Normalized factor scores feeding the aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubScores {
    pub savings: f64,
    pub emergency: f64,
    pub debt: f64,
    pub insurance: f64,
    pub investment: f64,
}

impl SubScores {
    /// Compute all five factors for a profile
    pub fn for_profile(profile: &FinancialProfile) -> Self {
        let rate = savings_rate(profile.monthly_income, profile.monthly_expenses);
        Self {
            savings: savings_score(rate),
            emergency: emergency_score(profile.emergency_fund, profile.monthly_expenses),
            debt: debt_score(profile.liabilities.high_interest, profile.annual_income()),
            insurance: insurance_score(profile.health_insurance, profile.term_insurance),
            investment: investment_score(profile.total_investments(), profile.annual_income()),
        }
    }
}

/// Monthly savings as a percentage of income.
/// Non-positive income yields the -1 sentinel, which both zeroes the
/// savings factor and triggers the overspend penalty downstream.
pub fn savings_rate(monthly_income: f64, monthly_expenses: f64) -> f64 {
    if monthly_income > 0.0 {
        (monthly_income - monthly_expenses) / monthly_income * 100.0
    } else {
        -1.0
    }
}

/// Savings factor: 30%+ of income saved is a full score
pub fn savings_score(savings_rate: f64) -> f64 {
    if savings_rate >= 30.0 {
        1.0
    } else if savings_rate >= 15.0 {
        0.7
    } else if savings_rate >= 5.0 {
        0.4
    } else {
        0.0
    }
}

/// Emergency factor: months of expenses covered by the liquid fund.
/// Zero expenses count as fully covered.
pub fn emergency_score(emergency_fund: f64, monthly_expenses: f64) -> f64 {
    let months = if monthly_expenses > 0.0 {
        emergency_fund / monthly_expenses
    } else {
        FULL_COVERAGE_MONTHS
    };

    if months >= 6.0 {
        1.0
    } else if months >= 3.0 {
        0.7
    } else if months >= 1.0 {
        0.3
    } else {
        0.0
    }
}

/// Debt factor: high-interest balances against annual income.
/// No income to service outstanding debt lands in the worst tier.
pub fn debt_score(high_interest_debt: f64, annual_income: f64) -> f64 {
    if high_interest_debt <= 0.0 {
        1.0
    } else if annual_income > 0.0 && high_interest_debt / annual_income < 0.1 {
        0.5
    } else {
        0.1
    }
}

/// Insurance factor: half a point per cover held
pub fn insurance_score(health_insurance: bool, term_insurance: bool) -> f64 {
    let health = if health_insurance { 1.0 } else { 0.0 };
    let term = if term_insurance { 1.0 } else { 0.0 };
    health * 0.5 + term * 0.5
}

/// Investment factor: total holdings against annual income.
/// Any holdings with zero income count as an exceeded ratio.
pub fn investment_score(total_investments: f64, annual_income: f64) -> f64 {
    if total_investments <= 0.0 {
        0.0
    } else if annual_income <= 0.0 || total_investments / annual_income > 1.0 {
        1.0
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Investments, Liabilities};
    use approx::assert_relative_eq;

    #[test]
    fn test_savings_rate() {
        assert_relative_eq!(savings_rate(100_000.0, 70_000.0), 30.0);
        assert_relative_eq!(savings_rate(100_000.0, 110_000.0), -10.0);
        assert_eq!(savings_rate(0.0, 50_000.0), -1.0);
        assert_eq!(savings_rate(-5.0, 0.0), -1.0);
    }

    #[test]
    fn test_savings_tiers() {
        assert_eq!(savings_score(45.0), 1.0);
        assert_eq!(savings_score(30.0), 1.0);
        assert_eq!(savings_score(29.9), 0.7);
        assert_eq!(savings_score(15.0), 0.7);
        assert_eq!(savings_score(5.0), 0.4);
        assert_eq!(savings_score(4.9), 0.0);
        assert_eq!(savings_score(-1.0), 0.0);
    }

    #[test]
    fn test_emergency_tiers() {
        assert_eq!(emergency_score(600_000.0, 100_000.0), 1.0); // 6 months
        assert_eq!(emergency_score(300_000.0, 100_000.0), 0.7); // 3 months
        assert_eq!(emergency_score(100_000.0, 100_000.0), 0.3); // 1 month
        assert_eq!(emergency_score(50_000.0, 100_000.0), 0.0);

        // No expenses means the fund covers everything
        assert_eq!(emergency_score(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_debt_tiers() {
        let annual = 1_200_000.0;
        assert_eq!(debt_score(0.0, annual), 1.0);
        assert_eq!(debt_score(100_000.0, annual), 0.5); // ratio 0.083
        assert_eq!(debt_score(120_000.0, annual), 0.1); // ratio exactly 0.1
        assert_eq!(debt_score(500_000.0, annual), 0.1);

        // Debt with no income to service it
        assert_eq!(debt_score(10_000.0, 0.0), 0.1);
    }

    #[test]
    fn test_insurance_combinations() {
        assert_eq!(insurance_score(false, false), 0.0);
        assert_eq!(insurance_score(true, false), 0.5);
        assert_eq!(insurance_score(false, true), 0.5);
        assert_eq!(insurance_score(true, true), 1.0);
    }

    #[test]
    fn test_investment_tiers() {
        let annual = 1_200_000.0;
        assert_eq!(investment_score(0.0, annual), 0.0);
        assert_eq!(investment_score(600_000.0, annual), 0.5);
        assert_eq!(investment_score(1_200_000.0, annual), 0.5); // ratio exactly 1
        assert_eq!(investment_score(1_300_000.0, annual), 1.0);

        // Holdings with no income: ratio counts as exceeded
        assert_eq!(investment_score(50_000.0, 0.0), 1.0);
    }

    #[test]
    fn test_for_profile() {
        let profile = FinancialProfile {
            monthly_income: 100_000.0,
            monthly_expenses: 70_000.0,
            emergency_fund: 280_000.0,
            liabilities: Liabilities {
                high_interest: 0.0,
                low_interest: 2_000_000.0,
            },
            investments: Investments {
                equity: 500_000.0,
                ..Default::default()
            },
            health_insurance: true,
            term_insurance: false,
            ..Default::default()
        };

        let scores = SubScores::for_profile(&profile);
        assert_eq!(scores.savings, 1.0); // 30% rate
        assert_eq!(scores.emergency, 0.7); // 4 months
        assert_eq!(scores.debt, 1.0); // low-interest debt does not count
        assert_eq!(scores.insurance, 0.5);
        assert_eq!(scores.investment, 0.5); // 500k vs 1.2M annual
    }
}
