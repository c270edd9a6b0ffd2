//! Financial profile data structures and loading

mod data;
pub mod loader;

pub use data::{
    FinancialProfile, Goal, Investments, Liabilities, ProfileState, RiskTolerance, DEFAULT_AGE,
};
pub(crate) use data::de_amount;
pub use loader::{load_profile, load_profiles, load_profiles_from_reader, ProfileError};
