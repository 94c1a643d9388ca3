use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::error::CalcError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Result<NaiveDate, CalcError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CalcError::parse("date (YYYY-MM-DD)", s))
}

/// Whole calendar months from `from` to `to`, truncated toward zero.
///
/// The count starts from the year/month components alone, then backs off by
/// one if stepping `from` by that many months (day clamped to the end of the
/// month) would overshoot `to`. Time of day takes part in the comparison, so
/// `2026-10-19 12:00` to `2026-11-19 00:00` is still zero months.
pub fn months_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());

    // Day clamping can overshoot by less than a month, never more.
    match shift_months(from, months) {
        None => 0,
        Some(shifted) if months > 0 && shifted > to => months - 1,
        Some(shifted) if months < 0 && shifted < to => months + 1,
        Some(_) => months,
    }
}

fn shift_months(from: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        from.checked_add_months(step)
    } else {
        from.checked_sub_months(step)
    }
}

/// `date` moved forward by `months`, with the day clamped to the target month's length.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, CalcError> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| CalcError::Unexpected(format!("date out of range: {date} plus {months} months")))
}

/// e.g. `"January 2026"`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
