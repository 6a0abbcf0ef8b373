//! Expense record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval state of a submitted expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Approved for reimbursement.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

/// An expense submitted by a subject for reimbursement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier for the expense.
    pub id: String,
    /// The subject who submitted the expense.
    pub subject_id: String,
    /// The monetary amount of the expense.
    pub amount: Decimal,
    /// What the expense was for.
    pub description: String,
    /// The date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Reference to an uploaded receipt, if any.
    #[serde(default)]
    pub receipt: Option<String>,
    /// Approval state.
    pub status: ApprovalStatus,
}
