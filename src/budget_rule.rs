use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CalcError;
use crate::money::parse_amount;

/// Shares of monthly income for needs, wants and savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRule {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

impl Default for BudgetRule {
    /// The 50/30/20 rule.
    fn default() -> Self {
        Self {
            needs: Decimal::new(50, 2),
            wants: Decimal::new(30, 2),
            savings: Decimal::new(20, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSplit {
    #[serde(with = "rust_decimal::serde::float")]
    pub needs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub wants: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub savings: Decimal,
}

impl BudgetSplit {
    pub fn total(&self) -> Decimal {
        self.needs + self.wants + self.savings
    }
}

impl BudgetRule {
    /// Split `income` by this rule. Zero or negative income is split the same way.
    pub fn apply(&self, income: Decimal) -> Result<BudgetSplit, CalcError> {
        let share = |ratio: Decimal| {
            income
                .checked_mul(ratio)
                .ok_or_else(|| CalcError::overflow("budget split"))
        };
        Ok(BudgetSplit {
            needs: share(self.needs)?,
            wants: share(self.wants)?,
            savings: share(self.savings)?,
        })
    }
}

pub fn evaluate(income: Decimal) -> Result<BudgetSplit, CalcError> {
    BudgetRule::default().apply(income)
}

/// Parse the raw command-line text and split it by the 50/30/20 rule.
pub fn check(monthly_income: &str) -> Result<BudgetSplit, CalcError> {
    let income = parse_amount("monthly income", monthly_income)?;
    let split = evaluate(income)?;
    tracing::debug!(
        %income,
        needs = %split.needs,
        wants = %split.wants,
        savings = %split.savings,
        "budget split"
    );
    Ok(split)
}

#[cfg(test)]
#[path = "budget_rule_tests.rs"]
mod tests;
