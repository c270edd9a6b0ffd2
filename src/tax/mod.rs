//! Progressive income-tax computation and regime comparison

mod brackets;
mod comparison;

pub use brackets::{RegimeSchedule, TaxBracket, CESS_MULTIPLIER};
pub use comparison::{
    compare_regimes, DeductionSet, Regime, TaxComparison, TaxInputs, STANDARD_DEDUCTION,
};
