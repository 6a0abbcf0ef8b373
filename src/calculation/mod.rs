//! Calculation logic for the salary engine.
//!
//! This module contains the pure calculation functions: per-entry total
//! resolution, aggregation over entry collections (ungrouped, by calendar
//! month, by work category), expense summation, and assembly of the full
//! salary report. Everything here is synchronous, side-effect-free
//! arithmetic over fully-materialized inputs and is safe to call from any
//! number of threads.

mod aggregate;
mod entry_total;
mod expenses;
mod report;

pub use aggregate::{CategoryKey, salary_by_category, salary_by_month, salary_total};
pub use entry_total::{entry_total, resolved_rate};
pub use expenses::{expense_total, expenses_by_month};
pub use report::build_salary_report;
