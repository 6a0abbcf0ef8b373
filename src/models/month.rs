//! Calendar-month grouping key.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, used as the grouping key for monthly subtotals.
///
/// Ordering is chronological, but monthly groupings preserve the order of
/// first appearance in the input sequence rather than sorting.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::MonthKey;
/// use chrono::NaiveDate;
///
/// let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(key.to_string(), "January 2026");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MonthKey {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl MonthKey {
    /// Derives the month key from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the English month name.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
