use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::CalcError;

/// Digits with well-formed thousands groups, e.g. `1,234,567.89`.
const GROUPED_DIGITS: &str = r"^[0-9]{1,3}(,[0-9]{3})+(\.[0-9]+)?$";

fn grouped_digits() -> Result<&'static Regex, CalcError> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GROUPED_DIGITS))
        .as_ref()
        .map_err(|e| CalcError::Unexpected(e.to_string()))
}

/// Parse a money amount typed by a person: surrounding whitespace, a leading
/// `$` (after an optional minus) and well-formed thousands separators are
/// tolerated, as is scientific notation (`1e3`). A stray `$` or a comma
/// anywhere else is a parse error, so `12,50` is not read as `1250`.
pub fn parse_amount(what: &'static str, s: &str) -> Result<Decimal, CalcError> {
    let trimmed = s.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
    if unsigned.is_empty() || unsigned.starts_with(['-', '+']) {
        return Err(CalcError::parse(what, s));
    }

    let digits = if unsigned.contains(',') {
        if !grouped_digits()?.is_match(unsigned) {
            return Err(CalcError::parse(what, s));
        }
        unsigned.replace(',', "")
    } else {
        unsigned.to_string()
    };

    let amount = match Decimal::from_str(&digits).or_else(|_| Decimal::from_scientific(&digits)) {
        Ok(amount) => amount,
        // Numeric, just not representable as a Decimal (e.g. `1e30`).
        Err(_) if digits.parse::<f64>().is_ok_and(f64::is_finite) => {
            return Err(CalcError::Unexpected(format!("{what} out of range: '{s}'")));
        }
        Err(_) => return Err(CalcError::parse(what, s)),
    };
    Ok(if negative { -amount } else { amount })
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
