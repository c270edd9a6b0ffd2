//! Progressive tax bracket tables
//!
//! Each regime is an ordered bracket table plus a rebate cliff and the cess
//! multiplier, so the calculator is one generic evaluation over the data.
//! Adding a future regime or assessment year is a data change.

use serde::Serialize;

/// Health & education cess applied to computed tax (4%)
pub const CESS_MULTIPLIER: f64 = 1.04;

/// One taxed band: all income above `lower_bound` is taxed at
/// `marginal_rate`, on top of `base_tax` accumulated by the bands below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    pub lower_bound: f64,
    pub base_tax: f64,
    pub marginal_rate: f64,
}

/// A complete tax regime: ordered brackets, rebate cliff, cess
#[derive(Debug, Clone)]
pub struct RegimeSchedule {
    /// Taxable income at or below this owes nothing, regardless of brackets
    rebate_limit: f64,
    /// Flat multiplier applied to the bracket tax before rounding
    cess_multiplier: f64,
    /// Ascending by lower bound
    brackets: Vec<TaxBracket>,
}

impl RegimeSchedule {
    pub fn new(rebate_limit: f64, cess_multiplier: f64, brackets: Vec<TaxBracket>) -> Self {
        Self {
            rebate_limit,
            cess_multiplier,
            brackets,
        }
    }

    /// Old regime: itemized deductions allowed, rebate below 5,00,000.
    /// The 5% band sits entirely under the rebate cliff.
    pub fn old_regime() -> Self {
        Self::new(
            500_000.0,
            CESS_MULTIPLIER,
            vec![
                TaxBracket { lower_bound: 250_000.0, base_tax: 0.0, marginal_rate: 0.05 },
                TaxBracket { lower_bound: 500_000.0, base_tax: 12_500.0, marginal_rate: 0.20 },
                TaxBracket { lower_bound: 1_000_000.0, base_tax: 112_500.0, marginal_rate: 0.30 },
            ],
        )
    }

    /// New regime: no itemized deductions, rebate below 7,00,000
    pub fn new_regime() -> Self {
        Self::new(
            700_000.0,
            CESS_MULTIPLIER,
            vec![
                TaxBracket { lower_bound: 300_000.0, base_tax: 0.0, marginal_rate: 0.05 },
                TaxBracket { lower_bound: 600_000.0, base_tax: 15_000.0, marginal_rate: 0.10 },
                TaxBracket { lower_bound: 900_000.0, base_tax: 45_000.0, marginal_rate: 0.15 },
                TaxBracket { lower_bound: 1_200_000.0, base_tax: 90_000.0, marginal_rate: 0.20 },
                TaxBracket { lower_bound: 1_500_000.0, base_tax: 150_000.0, marginal_rate: 0.30 },
            ],
        )
    }

    /// The bracket the income falls in: the highest band whose lower bound
    /// it exceeds. The rebate cliff is not consulted here.
    fn bracket_for(&self, taxable_income: f64) -> Option<&TaxBracket> {
        self.brackets
            .iter()
            .rev()
            .find(|bracket| taxable_income > bracket.lower_bound)
    }

    /// Tax owed on the given taxable income, in whole rupees.
    ///
    /// The rebate cliff is checked before any bracket math; income at or
    /// below it owes zero. Above it, tax is the bracket's accumulated base
    /// plus the marginal rate on the excess, scaled by cess and rounded.
    pub fn tax_for(&self, taxable_income: f64) -> u64 {
        if taxable_income <= self.rebate_limit {
            return 0;
        }

        let Some(bracket) = self.bracket_for(taxable_income) else {
            return 0;
        };

        let tax = bracket.base_tax + (taxable_income - bracket.lower_bound) * bracket.marginal_rate;
        (tax * self.cess_multiplier).round() as u64
    }

    /// Top marginal rate reached, as a fraction; 0 under the rebate cliff
    pub fn top_slab(&self, taxable_income: f64) -> f64 {
        if taxable_income <= self.rebate_limit {
            return 0.0;
        }
        self.bracket_for(taxable_income)
            .map(|bracket| bracket.marginal_rate)
            .unwrap_or(0.0)
    }
}
