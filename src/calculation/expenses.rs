//! Expense summation.
//!
//! Salary reports display expense totals alongside salary totals; there is
//! no rate resolution here, just summation and the same month grouping used
//! for entries.

use rust_decimal::Decimal;

use crate::models::{ExpenseRecord, MonthKey};

use super::aggregate::fold_groups;

/// Sums all expense amounts.
///
/// Approval status is not consulted; callers wanting only approved
/// expenses filter before summing.
pub fn expense_total(expenses: &[ExpenseRecord]) -> Decimal {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Sums expense amounts per calendar month, keys in order of first
/// appearance.
pub fn expenses_by_month(expenses: &[ExpenseRecord]) -> Vec<(MonthKey, Decimal)> {
    fold_groups(
        expenses,
        |expense| MonthKey::from_date(expense.expense_date),
        |expense| expense.amount,
    )
}
