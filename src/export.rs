//! CSV export of computed timesheets.
//!
//! This is the presentation boundary: all two-decimal money formatting
//! lives here, never in the calculators. The layout matches the
//! downloadable timesheet the application offers: one row per entry
//! (Date / Time / Work Type / Hours-Jobs / Rate / Entry Total) followed by
//! a Monthly Total footer row.

use rust_decimal::Decimal;

use crate::calculation::{entry_total, resolved_rate, salary_total};
use crate::models::{CategoryCatalog, EntryKind, RateTable, WorkLogEntry};

const HEADER: &str = "Date,Time,Work Type,Hours/Jobs,Rate,Entry Total";

/// Formats a monetary amount with two decimal places.
fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Quotes a CSV field if it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders an entry's time-of-day range.
///
/// Custom-rated work has no meaningful time range and renders as "N/A",
/// as do entries with no recorded times. A single recorded time renders
/// on its own.
pub fn time_range(entry: &WorkLogEntry) -> String {
    if entry.is_custom_rated() {
        return "N/A".to_string();
    }
    match (entry.start_time, entry.end_time) {
        (Some(start), Some(end)) => {
            format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
        }
        (Some(start), None) => start.format("%H:%M").to_string(),
        (None, Some(end)) => end.format("%H:%M").to_string(),
        (None, None) => "N/A".to_string(),
    }
}

/// Display label for an entry's work type column.
fn work_type_label(entry: &WorkLogEntry, catalog: &CategoryCatalog) -> String {
    match &entry.kind {
        EntryKind::Standard { category_id } => catalog
            .get(category_id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| category_id.clone()),
        EntryKind::CustomRated { description, .. } => format!("Other: {}", description),
    }
}

/// Renders a set of entries (typically one month's worth) as CSV.
///
/// Unconfigured rates render as 0.00, matching the on-screen tables.
///
/// # Example
///
/// ```
/// use timesheet_engine::export::timesheet_csv;
/// use timesheet_engine::models::{CategoryCatalog, RateTable};
///
/// let csv = timesheet_csv(&[], &CategoryCatalog::new(), &RateTable::new());
/// assert!(csv.starts_with("Date,Time,Work Type,Hours/Jobs,Rate,Entry Total"));
/// ```
pub fn timesheet_csv(
    entries: &[WorkLogEntry],
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for entry in entries {
        let rate = resolved_rate(entry, catalog, rates).unwrap_or(Decimal::ZERO);
        let total = entry_total(entry, catalog, rates);
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            entry.work_date.format("%Y-%m-%d"),
            csv_field(&time_range(entry)),
            csv_field(&work_type_label(entry, catalog)),
            entry.quantity,
            money(rate),
            money(total),
        ));
    }

    let month_total = salary_total(entries, catalog, rates);
    out.push_str(&format!(",,,,Monthly Total,{}\n", money(month_total)));
    out
}
