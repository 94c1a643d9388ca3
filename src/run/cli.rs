use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;

use crate::error::CalcError;

#[cfg(feature = "calendar")]
const AFFORDABILITY_USAGE: &str =
    "Usage: affordability <item_cost> <current_savings> <monthly_savings> <desired_date:YYYY-MM-DD>";
const BUDGET_RULE_USAGE: &str = "Usage: budget_rule <monthly_income>";

/// One JSON line for stdout plus the process exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub json: String,
    pub code: u8,
}

impl Outcome {
    fn from_result<T: Serialize>(result: Result<T, CalcError>) -> Self {
        let rendered = result.and_then(|value| {
            serde_json::to_string(&value).map_err(|e| CalcError::Unexpected(e.to_string()))
        });
        match rendered {
            Ok(json) => Self { json, code: 0 },
            Err(err) => Self::error(&err),
        }
    }

    pub fn error(err: &CalcError) -> Self {
        tracing::debug!(error = %err, "reporting error");
        Self {
            json: error_json(&err.to_string()),
            code: err.exit_code(),
        }
    }

    pub fn is_error(&self) -> bool {
        serde_json::from_str::<serde_json::Value>(&self.json)
            .map(|v| v.get("error").is_some())
            .unwrap_or(true)
    }

    pub fn emit(&self) -> Result<ExitCode> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", self.json).context("Failed to write result to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(ExitCode::from(self.code))
    }
}

pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Print `{"error": "<tool> execution failed: ..."}` on stdout if anything panics,
/// so callers still get parseable output.
pub fn install_panic_hook(tool: &'static str) {
    std::panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(%detail, "panicked");
        println!("{}", error_json(&format!("{tool} execution failed: {detail}")));
    }));
}

fn take_args<'a, const N: usize>(
    args: &'a [String],
    usage: &str,
) -> Result<[&'a str; N], CalcError> {
    if args.len() < N {
        return Err(CalcError::Usage(usage.to_string()));
    }
    if args.len() > N {
        tracing::warn!(ignored = ?&args[N..], "ignoring extra arguments");
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// `affordability <item_cost> <current_savings> <monthly_savings> <desired_date>`
/// against the local wall clock.
#[cfg(feature = "calendar")]
pub fn affordability(args: &[String]) -> Outcome {
    affordability_at(args, chrono::Local::now().naive_local())
}

#[cfg(not(feature = "calendar"))]
pub fn affordability(_args: &[String]) -> Outcome {
    Outcome::error(&CalcError::MissingDependency { library: "chrono" })
}

#[cfg(feature = "calendar")]
pub fn affordability_at(args: &[String], now: chrono::NaiveDateTime) -> Outcome {
    let result = take_args::<4>(args, AFFORDABILITY_USAGE).and_then(
        |[item_cost, current_savings, monthly_savings, desired_date]| {
            crate::affordability::check(
                item_cost,
                current_savings,
                monthly_savings,
                desired_date,
                now,
            )
        },
    );
    Outcome::from_result(result)
}

/// `budget_rule <monthly_income>`
pub fn budget_rule(args: &[String]) -> Outcome {
    let result = take_args::<1>(args, BUDGET_RULE_USAGE)
        .and_then(|[monthly_income]| crate::budget_rule::check(monthly_income));
    Outcome::from_result(result)
}

pub fn as_cli(args: &[String]) -> Result<ExitCode> {
    let rest = args.get(2..).unwrap_or_default();
    match args.get(1).map(String::as_str) {
        None | Some("--help" | "-h" | "help") => {
            println!("{}", usage());
            Ok(ExitCode::SUCCESS)
        }
        Some("--version" | "-V" | "version") => {
            println!("budgetcalc {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Some("affordability") => affordability(rest).emit(),
        Some("budget-rule" | "budget_rule") => budget_rule(rest).emit(),
        Some(other) => {
            eprintln!("{}", usage());
            Outcome::error(&CalcError::Usage(format!("Unknown command: {other}"))).emit()
        }
    }
}

fn usage() -> String {
    [
        "budgetcalc: savings calculators that answer in JSON",
        "",
        "Usage: budgetcalc <command> [args]",
        "",
        "Commands:",
        "  affordability <item_cost> <current_savings> <monthly_savings> <YYYY-MM-DD>",
        "                                Can the item be afforded by the date, or when?",
        "  budget-rule <monthly_income>  Split income 50/30/20 into needs/wants/savings",
        "  --help, -h                    Show this help",
        "  --version, -V                 Show version",
        "",
        "Set BUDGETCALC_LOG=debug to trace calculations on stderr.",
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
