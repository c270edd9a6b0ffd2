//! Old vs new regime tax comparison

use super::brackets::RegimeSchedule;
use crate::profile::{de_amount, FinancialProfile};
use serde::{Deserialize, Serialize};

/// Standard deduction on salary income, applied under both regimes
pub const STANDARD_DEDUCTION: f64 = 50_000.0;

/// Itemized deductions eligible only under the old regime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeductionSet {
    /// PPF, EPF, ELSS, life insurance premiums (Section 80C)
    #[serde(rename = "investments80C", deserialize_with = "de_amount")]
    pub investments_80c: f64,

    /// Exempt portion of house rent allowance
    #[serde(deserialize_with = "de_amount")]
    pub hra: f64,

    /// Home loan interest (Section 24)
    #[serde(deserialize_with = "de_amount")]
    pub home_loan_interest: f64,

    /// Medical insurance premium (Section 80D)
    #[serde(rename = "medicalInsurance80D", deserialize_with = "de_amount")]
    pub medical_insurance_80d: f64,

    /// Additional NPS contribution (Section 80CCD(1B))
    #[serde(rename = "nps_80ccd1b", deserialize_with = "de_amount")]
    pub nps_80ccd_1b: f64,

    /// Education loan interest (Section 80E)
    #[serde(rename = "educationLoanInterest_80e", deserialize_with = "de_amount")]
    pub education_loan_interest_80e: f64,
}

impl DeductionSet {
    pub fn total(&self) -> f64 {
        self.investments_80c
            + self.hra
            + self.home_loan_interest
            + self.medical_insurance_80d
            + self.nps_80ccd_1b
            + self.education_loan_interest_80e
    }
}

/// Inputs to the regime comparison
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxInputs {
    /// Gross annual salary before any deductions
    #[serde(deserialize_with = "de_amount")]
    pub salary_income: f64,

    /// Interest, rental income, capital gains
    #[serde(deserialize_with = "de_amount")]
    pub other_income: f64,

    #[serde(flatten)]
    pub deductions: DeductionSet,
}

impl TaxInputs {
    /// Prefill from a profile: annualized salary, no other income, and no
    /// deductions claimed yet.
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        Self {
            salary_income: profile.annual_income(),
            other_income: 0.0,
            deductions: DeductionSet::default(),
        }
    }

    pub fn gross_income(&self) -> f64 {
        self.salary_income + self.other_income
    }
}

/// The two selectable tax rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Old => "Old",
            Regime::New => "New",
        }
    }
}

/// Outcome of comparing both regimes on the same gross income
#[derive(Debug, Clone, Serialize)]
pub struct TaxComparison {
    /// Whole-rupee tax under the old regime
    pub tax_old: u64,
    /// Whole-rupee tax under the new regime
    pub tax_new: u64,
    pub better: Regime,
    /// Rupees saved by choosing the better regime
    pub savings: u64,
    /// Top marginal rate reached under each regime, as a fraction
    pub top_slab_old: f64,
    pub top_slab_new: f64,
}

/// Compare both regimes for the given inputs.
///
/// The standard deduction comes off the gross income for both regimes; the
/// itemized deductions come off only under the old regime. Both taxable
/// incomes floor at zero. Equal taxes report the new regime as better.
pub fn compare_regimes(inputs: &TaxInputs) -> TaxComparison {
    let gross = inputs.gross_income();
    let taxable_new = (gross - STANDARD_DEDUCTION).max(0.0);
    let taxable_old = (gross - STANDARD_DEDUCTION - inputs.deductions.total()).max(0.0);

    let old = RegimeSchedule::old_regime();
    let new = RegimeSchedule::new_regime();

    let tax_old = old.tax_for(taxable_old);
    let tax_new = new.tax_for(taxable_new);

    let better = if tax_new <= tax_old {
        Regime::New
    } else {
        Regime::Old
    };

    TaxComparison {
        tax_old,
        tax_new,
        better,
        savings: tax_old.abs_diff(tax_new),
        top_slab_old: old.top_slab(taxable_old),
        top_slab_new: new.top_slab(taxable_new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_income() {
        let result = compare_regimes(&TaxInputs::default());
        assert_eq!(result.tax_old, 0);
        assert_eq!(result.tax_new, 0);
        assert_eq!(result.savings, 0);
        assert_eq!(result.better, Regime::New); // tie goes to the new regime
    }

    #[test]
    fn test_deductions_only_reduce_old_regime() {
        // 12,00,000 gross. Standard deduction leaves 11,50,000 for the new
        // regime. Old regime additionally claims 2,00,000 of 80C + HRA,
        // leaving 9,50,000.
        let inputs = TaxInputs {
            salary_income: 1_200_000.0,
            other_income: 0.0,
            deductions: DeductionSet {
                investments_80c: 150_000.0,
                hra: 50_000.0,
                ..Default::default()
            },
        };

        let result = compare_regimes(&inputs);
        // Old on 9,50,000: (12,500 + 20% of 4,50,000) * 1.04
        assert_eq!(result.tax_old, 106_600);
        // New on 11,50,000, in the 9,00,000 band: (45,000 + 15% of 2,50,000) * 1.04
        assert_eq!(result.tax_new, 85_800);
        assert_eq!(result.better, Regime::New);
        assert_eq!(result.savings, 20_800);
        assert_eq!(result.top_slab_old, 0.20);
        assert_eq!(result.top_slab_new, 0.15);
    }

    #[test]
    fn test_heavy_deductions_favor_old_regime() {
        // Enough itemized deductions to push old-regime taxable income
        // under its rebate cliff.
        let inputs = TaxInputs {
            salary_income: 900_000.0,
            other_income: 0.0,
            deductions: DeductionSet {
                investments_80c: 150_000.0,
                home_loan_interest: 200_000.0,
                ..Default::default()
            },
        };

        let result = compare_regimes(&inputs);
        assert_eq!(result.tax_old, 0); // 5,00,000 taxable, at the cliff
        // New on 8,50,000: (15,000 + 10% of 2,50,000) * 1.04
        assert_eq!(result.tax_new, 41_600);
        assert_eq!(result.better, Regime::Old);
        assert_eq!(result.savings, 41_600);
    }

    #[test]
    fn test_deductions_never_go_below_zero_taxable() {
        let inputs = TaxInputs {
            salary_income: 100_000.0,
            other_income: 0.0,
            deductions: DeductionSet {
                investments_80c: 500_000.0,
                ..Default::default()
            },
        };

        let result = compare_regimes(&inputs);
        assert_eq!(result.tax_old, 0);
        assert_eq!(result.tax_new, 0);
    }

    #[test]
    fn test_comparison_is_symmetric() {
        // The cheaper absolute amount wins no matter which side it is on
        let inputs = TaxInputs {
            salary_income: 2_500_000.0,
            other_income: 100_000.0,
            deductions: DeductionSet {
                investments_80c: 150_000.0,
                nps_80ccd_1b: 50_000.0,
                ..Default::default()
            },
        };

        let result = compare_regimes(&inputs);
        let cheaper = result.tax_old.min(result.tax_new);
        let expected = match result.better {
            Regime::Old => result.tax_old,
            Regime::New => result.tax_new,
        };
        assert_eq!(cheaper, expected);
        assert_eq!(result.savings, result.tax_old.abs_diff(result.tax_new));
    }

    #[test]
    fn test_from_profile_prefills_salary() {
        let profile = FinancialProfile {
            monthly_income: 80_000.0,
            ..Default::default()
        };

        let inputs = TaxInputs::from_profile(&profile);
        assert_eq!(inputs.salary_income, 960_000.0);
        assert_eq!(inputs.deductions.total(), 0.0);
    }

    #[test]
    fn test_inputs_deserialize_from_form_strings() {
        let json = r#"{
            "salaryIncome": "1500000",
            "otherIncome": "25000",
            "investments80C": "150000",
            "hra": "",
            "nps_80ccd1b": "50000"
        }"#;

        let inputs: TaxInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.gross_income(), 1_525_000.0);
        assert_eq!(inputs.deductions.total(), 200_000.0);
    }
}
