//! Financial profile data structures
//!
//! Profiles arrive from host records (onboarding forms, persisted JSON), so
//! every numeric field tolerates the string-typed values those forms produce:
//! unparseable input degrades to zero rather than failing the load.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Age assumed when the profile carries no date of birth
pub const DEFAULT_AGE: i32 = 30;

/// Investor risk appetite, as captured during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }
}

/// Outstanding debt balances split by interest burden
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Liabilities {
    /// Credit cards, personal loans
    #[serde(deserialize_with = "de_amount")]
    pub high_interest: f64,

    /// Home loans, car loans
    #[serde(deserialize_with = "de_amount")]
    pub low_interest: f64,
}

impl Liabilities {
    pub fn total(&self) -> f64 {
        self.high_interest + self.low_interest
    }
}

/// Investment holdings by asset class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Investments {
    /// Stocks, equity mutual funds, ELSS
    #[serde(deserialize_with = "de_amount")]
    pub equity: f64,

    /// FDs, PPF, EPF, debt funds, bonds
    #[serde(deserialize_with = "de_amount")]
    pub debt: f64,

    /// Investment properties (not the primary home)
    #[serde(deserialize_with = "de_amount")]
    pub real_estate: f64,

    /// Physical gold, SGBs, other alternatives
    #[serde(deserialize_with = "de_amount")]
    pub gold: f64,
}

impl Investments {
    pub fn total(&self) -> f64 {
        self.equity + self.debt + self.real_estate + self.gold
    }
}

/// A user-defined savings goal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Goal {
    pub name: String,

    /// Goals without a positive target are not assessable
    #[serde(deserialize_with = "de_amount")]
    pub target_amount: f64,

    #[serde(deserialize_with = "de_amount")]
    pub amount_saved: f64,

    #[serde(deserialize_with = "de_date")]
    pub target_date: Option<NaiveDate>,
}

/// One user's complete financial picture for a single computation call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialProfile {
    pub name: String,

    #[serde(deserialize_with = "de_date")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(deserialize_with = "de_count")]
    pub dependents: u32,

    #[serde(deserialize_with = "de_amount")]
    pub monthly_income: f64,

    #[serde(deserialize_with = "de_amount")]
    pub monthly_expenses: f64,

    /// Cash in savings accounts or liquid funds
    #[serde(deserialize_with = "de_amount")]
    pub emergency_fund: f64,

    pub liabilities: Liabilities,

    pub investments: Investments,

    #[serde(deserialize_with = "de_flag")]
    pub health_insurance: bool,

    #[serde(deserialize_with = "de_flag")]
    pub term_insurance: bool,

    #[serde(deserialize_with = "de_risk")]
    pub risk_tolerance: Option<RiskTolerance>,

    pub custom_goals: Vec<Goal>,
}

impl FinancialProfile {
    /// Calendar age on the given date, counting completed years.
    /// Profiles without a date of birth report [`DEFAULT_AGE`].
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        let Some(dob) = self.date_of_birth else {
            return DEFAULT_AGE;
        };
        let mut age = as_of.year() - dob.year();
        if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        age
    }

    pub fn monthly_savings(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }

    pub fn annual_income(&self) -> f64 {
        self.monthly_income * 12.0
    }

    pub fn total_investments(&self) -> f64 {
        self.investments.total()
    }

    /// Liquid assets plus investment holdings
    pub fn total_assets(&self) -> f64 {
        self.emergency_fund + self.investments.total()
    }

    pub fn net_worth(&self) -> f64 {
        self.total_assets() - self.liabilities.total()
    }
}

/// Whether the host has financial data for the user yet.
///
/// Onboarding may still be in progress, in which case there is nothing to
/// score; modeling that explicitly keeps the engine functions total over
/// `&FinancialProfile`.
#[derive(Debug, Clone, Default)]
pub enum ProfileState {
    #[default]
    Unset,
    Ready(FinancialProfile),
}

impl ProfileState {
    pub fn profile(&self) -> Option<&FinancialProfile> {
        match self {
            ProfileState::Unset => None,
            ProfileState::Ready(profile) => Some(profile),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ProfileState::Ready(_))
    }
}

impl From<Option<FinancialProfile>> for ProfileState {
    fn from(profile: Option<FinancialProfile>) -> Self {
        match profile {
            Some(profile) => ProfileState::Ready(profile),
            None => ProfileState::Unset,
        }
    }
}

// ============================================================================
// Lenient field parsing
// ============================================================================
// Host forms store amounts and flags as strings; these helpers accept either
// the native JSON type or its string rendering and fall back to the field's
// zero value on anything unparseable.

/// Parse a currency amount from text; unparseable or non-finite input is 0
pub(crate) fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a non-negative count from text; unparseable or negative input is 0
pub(crate) fn parse_count(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(0) as u32
}

/// Parse a yes/no style flag from text
pub(crate) fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("yes") || raw.eq_ignore_ascii_case("true")
}

/// Parse a risk tolerance selection; unknown values are left unset
pub(crate) fn parse_risk(raw: &str) -> Option<RiskTolerance> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => Some(RiskTolerance::Low),
        "medium" => Some(RiskTolerance::Medium),
        "high" => Some(RiskTolerance::High),
        _ => None,
    }
}

/// Parse an ISO date from text; anything else is treated as absent
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagOrText {
    Flag(bool),
    Text(String),
}

pub(crate) fn de_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) if value.is_finite() => value,
        Some(NumberOrText::Text(raw)) => parse_amount(&raw),
        _ => 0.0,
    })
}

fn de_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) if value.is_finite() && value > 0.0 => value as u32,
        Some(NumberOrText::Text(raw)) => parse_count(&raw),
        _ => 0,
    })
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<FlagOrText>::deserialize(deserializer)? {
        Some(FlagOrText::Flag(value)) => value,
        Some(FlagOrText::Text(raw)) => parse_flag(&raw),
        None => false,
    })
}

fn de_risk<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<RiskTolerance>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_risk))
}

fn de_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_date))
}
