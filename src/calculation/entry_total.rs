//! Per-entry total calculation.
//!
//! This is the single rate-resolution rule all call sites depend on. The
//! legacy application re-derived it in more than ten places and the copies
//! drifted (one revision stopped multiplying fixed rates by the job count);
//! here it exists exactly once.

use rust_decimal::Decimal;

use crate::models::{CategoryCatalog, EntryKind, RateModel, RateTable, WorkLogEntry};

/// Resolves the per-unit rate for an entry.
///
/// Precedence:
/// 1. A custom-rated entry carries its own rate, which supersedes any
///    assigned rate entirely; the catalog and rate table are not consulted.
/// 2. Otherwise the category's rate model selects the hourly or fixed rate
///    from the subject's rate table.
///
/// Returns `None` when the category is unknown, the subject has no
/// assignment for it, or the selected rate is unconfigured. A configured
/// rate of 0.00 resolves to `Some(0)` so presentation layers can tell
/// "zero rate" apart from "no rate set".
pub fn resolved_rate(
    entry: &WorkLogEntry,
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> Option<Decimal> {
    match &entry.kind {
        EntryKind::CustomRated { rate, .. } => Some(*rate),
        EntryKind::Standard { category_id } => {
            let category = catalog.get(category_id)?;
            let category_rates = rates.get(category_id)?;
            match category.rate_model {
                RateModel::Hourly => category_rates.hourly_rate,
                RateModel::Fixed => category_rates.fixed_rate,
            }
        }
    }
}

/// Computes the monetary total for a single work-log entry.
///
/// The total is the resolved rate multiplied by the entry's quantity
/// (hours for hourly categories, job count for fixed ones). An entry with
/// no resolvable rate contributes zero; this is not an error, it means the
/// employer has not configured a rate yet.
///
/// Pure function: no side effects, same inputs always give the same total.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::entry_total;
/// use timesheet_engine::models::{
///     CategoryCatalog, CategoryRates, EntryKind, RateModel, RateTable,
///     WorkCategory, WorkLogEntry,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let catalog = CategoryCatalog::from_categories(vec![WorkCategory {
///     id: "cleaning".to_string(),
///     name: "Cleaning".to_string(),
///     rate_model: RateModel::Hourly,
/// }]);
/// let mut rates = RateTable::new();
/// rates.insert(
///     "cleaning",
///     CategoryRates {
///         hourly_rate: Some(Decimal::new(2000, 2)), // 20.00
///         fixed_rate: None,
///     },
/// );
/// let entry = WorkLogEntry {
///     id: "ts_001".to_string(),
///     subject_id: "staff_001".to_string(),
///     work_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     quantity: Decimal::new(75, 1), // 7.5 hours
///     start_time: None,
///     end_time: None,
///     kind: EntryKind::Standard {
///         category_id: "cleaning".to_string(),
///     },
/// };
/// assert_eq!(entry_total(&entry, &catalog, &rates), Decimal::new(150000, 3));
/// ```
pub fn entry_total(
    entry: &WorkLogEntry,
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> Decimal {
    match resolved_rate(entry, catalog, rates) {
        Some(rate) => rate * entry.quantity,
        None => Decimal::ZERO,
    }
}
