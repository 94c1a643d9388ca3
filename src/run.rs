mod cli;

pub use cli::{affordability, as_cli, budget_rule, error_json, install_panic_hook, Outcome};

#[cfg(feature = "calendar")]
pub use cli::affordability_at;
