//! Salary report result models.
//!
//! These types capture the outputs of a salary computation: per-entry
//! lines, monthly subtotals, and overall totals. All amounts are raw
//! decimals; two-decimal display formatting happens at the presentation
//! boundary (see the `export` module), never here.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MonthKey;

/// One computed line per work-log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryLine {
    /// The entry this line was computed from.
    pub entry_id: String,
    /// The date the work was performed.
    pub work_date: NaiveDate,
    /// Display label: the category name, or "Other: {description}" for
    /// custom-rated work.
    pub label: String,
    /// Hours or job count, as logged.
    pub quantity: Decimal,
    /// The per-unit rate that was applied; `None` when no rate is
    /// configured (the entry then contributes zero).
    pub rate: Option<Decimal>,
    /// The entry's monetary total (rate * quantity, or zero).
    pub total: Decimal,
}

/// Salary and expense subtotals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGroup {
    /// The month being summarized.
    pub month: MonthKey,
    /// Human-readable month label (e.g., "January 2026").
    pub label: String,
    /// Sum of entry totals in this month.
    pub salary_total: Decimal,
    /// Sum of expense amounts in this month.
    pub expense_total: Decimal,
    /// Salary plus reimbursed expenses.
    pub net_amount: Decimal,
}

/// Overall totals across the reported period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of all entry totals.
    pub salary_total: Decimal,
    /// Sum of all expense amounts.
    pub expense_total: Decimal,
    /// Salary plus reimbursed expenses.
    pub net_amount: Decimal,
}

/// The complete result of a salary computation for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// The subject the report was computed for.
    pub subject_id: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One line per work-log entry, in input order.
    pub lines: Vec<EntryLine>,
    /// Monthly subtotals, in order of first appearance in the input.
    pub months: Vec<MonthGroup>,
    /// Overall totals.
    pub totals: ReportTotals,
}
