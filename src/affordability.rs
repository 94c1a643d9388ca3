//! Can a savings goal be reached by a target date, and if not, when?

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::calendar::{add_months, month_label, months_between, parse_date};
use crate::error::CalcError;
use crate::money::parse_amount;

pub const AFFORDABLE_NOW: &str = "You can afford this now with your current savings.";
pub const AFFORDABLE_BY_DATE: &str = "Based on your projections, you can afford this!";
pub const NOT_SAVING: &str =
    "You are not saving money monthly, so you will not be able to afford this item.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordabilityRequest {
    pub item_cost: Decimal,
    pub current_savings: Decimal,
    pub monthly_savings: Decimal,
    pub desired_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Affordable { message: &'static str },
    NotAffordable { message: &'static str },
    /// Out of reach by the desired date, reachable after `months_needed` more months.
    NotYet {
        months_needed: u32,
        new_date: NaiveDate,
    },
}

impl Verdict {
    pub fn is_affordable(&self) -> bool {
        matches!(self, Self::Affordable { .. })
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Affordable { message } | Self::NotAffordable { message } => {
                let mut s = serializer.serialize_struct("Verdict", 2)?;
                s.serialize_field("affordable", &self.is_affordable())?;
                s.serialize_field("message", message)?;
                s.end()
            }
            Self::NotYet {
                months_needed,
                new_date,
            } => {
                let mut s = serializer.serialize_struct("Verdict", 3)?;
                s.serialize_field("affordable", &false)?;
                s.serialize_field("months_needed", months_needed)?;
                s.serialize_field("new_date", &month_label(*new_date))?;
                s.end()
            }
        }
    }
}

/// Parse the raw command-line text and evaluate it.
///
/// The amounts are parsed first. With nothing saved per month the answer
/// depends only on them, so the date is not looked at in that case.
pub fn check(
    item_cost: &str,
    current_savings: &str,
    monthly_savings: &str,
    desired_date: &str,
    now: NaiveDateTime,
) -> Result<Verdict, CalcError> {
    let item_cost = parse_amount("item cost", item_cost)?;
    let current_savings = parse_amount("current savings", current_savings)?;
    let monthly_savings = parse_amount("monthly savings", monthly_savings)?;

    if let Some(verdict) = without_monthly_savings(item_cost, current_savings, monthly_savings) {
        return Ok(verdict);
    }

    let request = AffordabilityRequest {
        item_cost,
        current_savings,
        monthly_savings,
        desired_date: parse_date(desired_date)?,
    };
    evaluate(&request, now)
}

pub fn evaluate(req: &AffordabilityRequest, now: NaiveDateTime) -> Result<Verdict, CalcError> {
    if let Some(verdict) =
        without_monthly_savings(req.item_cost, req.current_savings, req.monthly_savings)
    {
        return Ok(verdict);
    }

    // A target in the past leaves no time to save, it is not an error.
    let target = req.desired_date.and_time(NaiveTime::MIN);
    let months_remaining = months_between(now, target).max(0);

    let projected = req
        .monthly_savings
        .checked_mul(Decimal::from(months_remaining))
        .and_then(|saved| saved.checked_add(req.current_savings))
        .ok_or_else(|| CalcError::overflow("projected savings"))?;

    tracing::debug!(
        months_remaining,
        %projected,
        item_cost = %req.item_cost,
        "projected savings at desired date"
    );

    if projected >= req.item_cost {
        return Ok(Verdict::Affordable {
            message: AFFORDABLE_BY_DATE,
        });
    }

    let shortfall = req
        .item_cost
        .checked_sub(req.current_savings)
        .ok_or_else(|| CalcError::overflow("shortfall"))?;
    if shortfall <= Decimal::ZERO {
        return Ok(Verdict::Affordable {
            message: AFFORDABLE_NOW,
        });
    }

    // Partial months count as a whole month of saving.
    let mut months_needed = shortfall
        .checked_div(req.monthly_savings)
        .and_then(|months| months.ceil().to_u32())
        .ok_or_else(|| CalcError::overflow("months needed"))?;
    // The quotient is rounded to 28 significant digits and can land one short.
    let covered = req
        .monthly_savings
        .checked_mul(Decimal::from(months_needed))
        .ok_or_else(|| CalcError::overflow("months needed"))?;
    if covered < shortfall {
        months_needed = months_needed
            .checked_add(1)
            .ok_or_else(|| CalcError::overflow("months needed"))?;
    }
    let new_date = add_months(now.date(), months_needed)?;

    tracing::debug!(%shortfall, months_needed, %new_date, "goal postponed");

    Ok(Verdict::NotYet {
        months_needed,
        new_date,
    })
}

fn without_monthly_savings(
    item_cost: Decimal,
    current_savings: Decimal,
    monthly_savings: Decimal,
) -> Option<Verdict> {
    if monthly_savings > Decimal::ZERO {
        return None;
    }
    if current_savings >= item_cost {
        Some(Verdict::Affordable {
            message: AFFORDABLE_NOW,
        })
    } else {
        Some(Verdict::NotAffordable {
            message: NOT_SAVING,
        })
    }
}

#[cfg(test)]
#[path = "affordability_tests.rs"]
mod tests;
