#![allow(clippy::unwrap_used)]

use super::*;

fn at(date: &str, hour: u32) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn midnight(date: &str) -> NaiveDateTime {
    at(date, 0)
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_iso() {
    assert_eq!(
        parse_date("2027-06-01").unwrap(),
        NaiveDate::from_ymd_opt(2027, 6, 1).unwrap()
    );
}

#[test]
fn test_parse_date_rejects_other_formats() {
    assert!(parse_date("06/01/2027").is_err());
    assert!(parse_date("2027-13-01").is_err());
    assert!(parse_date("tomorrow").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_parse_date_error_message() {
    let err = parse_date("soon").unwrap_err();
    assert_eq!(err.to_string(), "could not parse date (YYYY-MM-DD) from 'soon'");
}

// ── months_between ────────────────────────────────────────────

#[test]
fn test_months_between_same_instant() {
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2026-10-19")), 0);
}

#[test]
fn test_months_between_exact_months() {
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2027-06-19")), 8);
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2028-10-19")), 24);
}

#[test]
fn test_months_between_day_before_rollover() {
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2026-11-18")), 0);
}

#[test]
fn test_months_between_on_and_after_rollover() {
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2026-11-19")), 1);
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2026-11-20")), 1);
}

#[test]
fn test_months_between_next_calendar_month_but_not_a_full_month() {
    assert_eq!(months_between(midnight("2026-10-31"), midnight("2026-11-01")), 0);
    assert_eq!(months_between(midnight("2026-12-31"), midnight("2027-01-01")), 0);
}

#[test]
fn test_months_between_time_of_day_counts() {
    // Target midnight is earlier than noon on the anniversary.
    assert_eq!(months_between(at("2026-10-19", 12), midnight("2026-11-19")), 0);
    assert_eq!(months_between(at("2026-10-19", 12), midnight("2026-11-20")), 1);
}

#[test]
fn test_months_between_clamps_to_month_end() {
    // Jan 31 + 1 month lands on Feb 28, which does not overshoot.
    assert_eq!(months_between(midnight("2026-01-31"), midnight("2026-02-28")), 1);
    assert_eq!(months_between(midnight("2026-01-31"), midnight("2026-02-27")), 0);
}

#[test]
fn test_months_between_past_target_is_negative() {
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2026-08-01")), -2);
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2026-10-01")), 0);
    assert_eq!(months_between(midnight("2026-10-19"), midnight("2025-10-19")), -12);
}

// ── add_months / month_label ──────────────────────────────────

#[test]
fn test_add_months_crosses_year() {
    let d = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(add_months(d, 10).unwrap(), NaiveDate::from_ymd_opt(2027, 8, 19).unwrap());
}

#[test]
fn test_add_months_clamps_day() {
    let d = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    assert_eq!(add_months(d, 1).unwrap(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
}

#[test]
fn test_add_months_out_of_range() {
    let d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert!(matches!(add_months(d, u32::MAX), Err(CalcError::Unexpected(_))));
}

#[test]
fn test_month_label() {
    let d = NaiveDate::from_ymd_opt(2027, 8, 19).unwrap();
    assert_eq!(month_label(d), "August 2027");
    let d = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    assert_eq!(month_label(d), "January 2026");
}

#[test]
fn test_months_between_full_chrono_range() {
    let first = NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap();
    let last = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
    let span = i64::from(NaiveDate::MAX.year() - NaiveDate::MIN.year()) * 12 + 11;
    assert_eq!(months_between(first, last), span);
    assert_eq!(months_between(last, first), -span);
}
