//! Load financial profiles from host records
//!
//! Two sources: a single profile persisted as JSON (the shape the host
//! application stores after onboarding, `null` while onboarding is still in
//! progress), and a CSV block of profiles for batch scoring.

use super::data::{parse_amount, parse_count, parse_date, parse_flag, parse_risk};
use super::{FinancialProfile, Investments, Liabilities, ProfileState};
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced while reading profile files
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile block record")]
    Csv(#[from] csv::Error),
}

/// Load a single profile from a JSON file.
///
/// A JSON `null` body is a valid record meaning onboarding has not finished,
/// and maps to [`ProfileState::Unset`].
pub fn load_profile(path: &Path) -> Result<ProfileState, ProfileError> {
    let file = File::open(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profile: Option<FinancialProfile> =
        serde_json::from_reader(file).map_err(|source| ProfileError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if profile.is_none() {
        debug!("{} holds no financial data yet", path.display());
    }
    Ok(ProfileState::from(profile))
}

/// One CSV row of the profile block.
///
/// Every field is read as text and parsed leniently, so a partially filled
/// export loads with zeros rather than failing the whole block.
#[derive(Debug, Default, Deserialize)]
struct BlockRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    date_of_birth: String,
    #[serde(default)]
    dependents: String,
    #[serde(default)]
    monthly_income: String,
    #[serde(default)]
    monthly_expenses: String,
    #[serde(default)]
    emergency_fund: String,
    #[serde(default)]
    high_interest_debt: String,
    #[serde(default)]
    low_interest_debt: String,
    #[serde(default)]
    equity: String,
    #[serde(default)]
    debt_investments: String,
    #[serde(default)]
    real_estate: String,
    #[serde(default)]
    gold: String,
    #[serde(default)]
    health_insurance: String,
    #[serde(default)]
    term_insurance: String,
    #[serde(default)]
    risk_tolerance: String,
}

impl BlockRecord {
    fn into_profile(self) -> FinancialProfile {
        FinancialProfile {
            name: self.name,
            date_of_birth: parse_date(&self.date_of_birth),
            dependents: parse_count(&self.dependents),
            monthly_income: parse_amount(&self.monthly_income),
            monthly_expenses: parse_amount(&self.monthly_expenses),
            emergency_fund: parse_amount(&self.emergency_fund),
            liabilities: Liabilities {
                high_interest: parse_amount(&self.high_interest_debt),
                low_interest: parse_amount(&self.low_interest_debt),
            },
            investments: Investments {
                equity: parse_amount(&self.equity),
                debt: parse_amount(&self.debt_investments),
                real_estate: parse_amount(&self.real_estate),
                gold: parse_amount(&self.gold),
            },
            health_insurance: parse_flag(&self.health_insurance),
            term_insurance: parse_flag(&self.term_insurance),
            risk_tolerance: parse_risk(&self.risk_tolerance),
            custom_goals: Vec::new(),
        }
    }
}

/// Load a block of profiles from a CSV file
pub fn load_profiles(path: &Path) -> Result<Vec<FinancialProfile>, ProfileError> {
    let file = File::open(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = load_profiles_from_reader(file)?;
    info!("loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Load a block of profiles from any CSV reader
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<FinancialProfile>, ProfileError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut profiles = Vec::new();
    for record in csv_reader.deserialize() {
        let record: BlockRecord = record?;
        profiles.push(record.into_profile());
    }
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "\
name,date_of_birth,dependents,monthly_income,monthly_expenses,emergency_fund,high_interest_debt,low_interest_debt,equity,debt_investments,real_estate,gold,health_insurance,term_insurance,risk_tolerance
Asha,1992-03-01,2,120000,80000,400000,0,1500000,250000,100000,0,0,yes,yes,medium
Vikram,1999-11-20,0,60000,45000,90000,30000,0,50000,0,0,0,no,no,high
";

    #[test]
    fn test_load_block() {
        let profiles = load_profiles_from_reader(BLOCK.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 2);

        assert_eq!(profiles[0].name, "Asha");
        assert_eq!(profiles[0].dependents, 2);
        assert_eq!(profiles[0].liabilities.low_interest, 1_500_000.0);
        assert!(profiles[0].health_insurance);

        assert_eq!(profiles[1].dependents, 0);
        assert_eq!(profiles[1].liabilities.high_interest, 30_000.0);
        assert!(!profiles[1].term_insurance);
    }

    #[test]
    fn test_partial_rows_load_with_zeros() {
        let block = "\
name,date_of_birth,dependents,monthly_income,monthly_expenses,emergency_fund,high_interest_debt,low_interest_debt,equity,debt_investments,real_estate,gold,health_insurance,term_insurance,risk_tolerance
Ravi,,unknown,85000,not-a-number,,,,,,,,,,
";
        let profiles = load_profiles_from_reader(block.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 1);

        let ravi = &profiles[0];
        assert_eq!(ravi.date_of_birth, None);
        assert_eq!(ravi.dependents, 0);
        assert_eq!(ravi.monthly_income, 85_000.0);
        assert_eq!(ravi.monthly_expenses, 0.0);
        assert_eq!(ravi.risk_tolerance, None);
    }
}
