//! Two small calculators behind a JSON command-line surface: whether a savings
//! goal is affordable by a target date, and the 50/30/20 split of an income.

#[cfg(feature = "calendar")]
pub mod affordability;
pub mod budget_rule;
#[cfg(feature = "calendar")]
pub mod calendar;
pub mod error;
pub mod logging;
pub mod money;
pub mod run;

pub use error::CalcError;
