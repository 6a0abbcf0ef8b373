//! Core data models for the salary calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod category;
mod entry;
mod expense;
mod month;
mod rates;
mod report;

pub use category::{CategoryCatalog, RateModel, WorkCategory};
pub use entry::{EntryKind, WorkLogEntry};
pub use expense::{ApprovalStatus, ExpenseRecord};
pub use month::MonthKey;
pub use rates::{CategoryRates, RateAssignment, RateTable};
pub use report::{EntryLine, MonthGroup, ReportTotals, SalaryReport};
