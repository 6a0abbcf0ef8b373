//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for the `/report` and
//! `/entry-total` endpoints. The subject is always named explicitly in the
//! request body; there is no ambient "current user".

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ApprovalStatus, EntryKind, ExpenseRecord, WorkLogEntry};

/// Request body for the `/report` endpoint.
///
/// Carries everything the engine needs: whose report this is, the
/// work-log entries, and the expenses for the period. Rates come from the
/// server's configured assignments for the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The subject (staff member) the report is for.
    pub subject_id: String,
    /// Work-log entries in display order (typically descending date).
    #[serde(default)]
    pub entries: Vec<EntryRequest>,
    /// Expenses submitted in the same period.
    #[serde(default)]
    pub expenses: Vec<ExpenseRequest>,
}

/// Request body for the `/entry-total` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryTotalRequest {
    /// The subject whose rate assignments apply.
    pub subject_id: String,
    /// The entry to compute a total for.
    pub entry: EntryRequest,
}

/// A work-log entry in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// The date the work was performed.
    pub work_date: NaiveDate,
    /// Hours worked or job count, depending on the category's rate model.
    pub quantity: Decimal,
    /// Optional start time of day.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Optional end time of day.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Standard (category-rated) or custom-rated work.
    pub kind: EntryKindRequest,
}

/// Entry kind in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKindRequest {
    /// Work against a catalogued category.
    Standard {
        /// The work category this entry is logged against.
        category_id: String,
    },
    /// Miscellaneous work with its own per-unit rate.
    CustomRated {
        /// What the work was.
        description: String,
        /// The per-unit rate that supersedes any assigned rate.
        rate: Decimal,
    },
}

/// An expense in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRequest {
    /// Unique identifier for the expense.
    pub id: String,
    /// The monetary amount.
    pub amount: Decimal,
    /// What the expense was for.
    pub description: String,
    /// The date the expense was incurred.
    pub expense_date: NaiveDate,
    /// Reference to an uploaded receipt, if any.
    #[serde(default)]
    pub receipt: Option<String>,
    /// Approval state; defaults to pending.
    #[serde(default = "default_status")]
    pub status: ApprovalStatus,
}

fn default_status() -> ApprovalStatus {
    ApprovalStatus::Pending
}

impl From<EntryKindRequest> for EntryKind {
    fn from(req: EntryKindRequest) -> Self {
        match req {
            EntryKindRequest::Standard { category_id } => EntryKind::Standard { category_id },
            EntryKindRequest::CustomRated { description, rate } => {
                EntryKind::CustomRated { description, rate }
            }
        }
    }
}

impl EntryRequest {
    /// Converts the request entry into a domain entry owned by `subject_id`.
    pub fn into_entry(self, subject_id: &str) -> WorkLogEntry {
        WorkLogEntry {
            id: self.id,
            subject_id: subject_id.to_string(),
            work_date: self.work_date,
            quantity: self.quantity,
            start_time: self.start_time,
            end_time: self.end_time,
            kind: self.kind.into(),
        }
    }
}

impl ExpenseRequest {
    /// Converts the request expense into a domain record owned by
    /// `subject_id`.
    pub fn into_expense(self, subject_id: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: self.id,
            subject_id: subject_id.to_string(),
            amount: self.amount,
            description: self.description,
            expense_date: self.expense_date,
            receipt: self.receipt,
            status: self.status,
        }
    }
}
