//! Salary calculation engine for the TimeSheet staff payroll tracker.
//!
//! This crate turns work-log entries (hours or job counts logged against
//! assignable work categories) and per-subject rate assignments into
//! monetary totals: per-entry amounts, monthly subtotals, and full salary
//! reports with expense summaries alongside.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
