//! Aggregation of entry totals.
//!
//! Sums are order-independent (addition is commutative); grouping preserves
//! the order of first appearance in the input sequence, which is what the
//! display layer uses for stable month ordering.

use rust_decimal::Decimal;

use crate::models::{CategoryCatalog, EntryKind, MonthKey, RateTable, WorkLogEntry};

use super::entry_total;

/// Grouping key for per-category subtotals.
///
/// All custom-rated entries share one bucket, mirroring the single
/// miscellaneous category they replace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    /// A catalogued work category.
    Category(String),
    /// Custom-rated miscellaneous work.
    Custom,
}

/// Sums totals over items, grouped by key in order of first appearance.
pub(crate) fn fold_groups<T, K, FK, FV>(
    items: impl IntoIterator<Item = T>,
    mut key_of: FK,
    mut value_of: FV,
) -> Vec<(K, Decimal)>
where
    K: PartialEq,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> Decimal,
{
    let mut groups: Vec<(K, Decimal)> = Vec::new();
    for item in items {
        let key = key_of(&item);
        let value = value_of(&item);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, subtotal)) => *subtotal += value,
            None => groups.push((key, value)),
        }
    }
    groups
}

/// Sums the totals of all entries.
///
/// An entry with no resolvable rate contributes zero; the aggregation
/// never fails part-way through.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::salary_total;
/// use timesheet_engine::models::{CategoryCatalog, RateTable};
/// use rust_decimal::Decimal;
///
/// let total = salary_total(&[], &CategoryCatalog::new(), &RateTable::new());
/// assert_eq!(total, Decimal::ZERO);
/// ```
pub fn salary_total(
    entries: &[WorkLogEntry],
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> Decimal {
    entries
        .iter()
        .map(|entry| entry_total(entry, catalog, rates))
        .sum()
}

/// Sums entry totals per calendar month.
///
/// Month keys appear in the order their first entry appears in the input.
pub fn salary_by_month(
    entries: &[WorkLogEntry],
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> Vec<(MonthKey, Decimal)> {
    fold_groups(
        entries,
        |entry| MonthKey::from_date(entry.work_date),
        |entry| entry_total(entry, catalog, rates),
    )
}

/// Sums entry totals per work category.
///
/// Custom-rated entries all land in the [`CategoryKey::Custom`] bucket.
pub fn salary_by_category(
    entries: &[WorkLogEntry],
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> Vec<(CategoryKey, Decimal)> {
    fold_groups(
        entries,
        |entry| match &entry.kind {
            EntryKind::Standard { category_id } => CategoryKey::Category(category_id.clone()),
            EntryKind::CustomRated { .. } => CategoryKey::Custom,
        },
        |entry| entry_total(entry, catalog, rates),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRates, RateModel, WorkCategory};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_catalog() -> CategoryCatalog {
        CategoryCatalog::from_categories(vec![
            WorkCategory {
                id: "cleaning".to_string(),
                name: "Cleaning".to_string(),
                rate_model: RateModel::Hourly,
            },
            WorkCategory {
                id: "delivery".to_string(),
                name: "Delivery".to_string(),
                rate_model: RateModel::Fixed,
            },
        ])
    }

    fn test_rates() -> RateTable {
        let mut rates = RateTable::new();
        rates.insert(
            "cleaning",
            CategoryRates {
                hourly_rate: Some(dec("20")),
                fixed_rate: None,
            },
        );
        rates.insert(
            "delivery",
            CategoryRates {
                hourly_rate: None,
                fixed_rate: Some(dec("45")),
            },
        );
        rates
    }

    fn entry(id: &str, category_id: &str, date: &str, quantity: &str) -> WorkLogEntry {
        WorkLogEntry {
            id: id.to_string(),
            subject_id: "staff_001".to_string(),
            work_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            quantity: dec(quantity),
            start_time: None,
            end_time: None,
            kind: EntryKind::Standard {
                category_id: category_id.to_string(),
            },
        }
    }

    fn custom(id: &str, date: &str, rate: &str, quantity: &str) -> WorkLogEntry {
        WorkLogEntry {
            kind: EntryKind::CustomRated {
                description: "Misc".to_string(),
                rate: dec(rate),
            },
            ..entry(id, "ignored", date, quantity)
        }
    }

    /// The aggregate scenario from the salary report: 150 + 135 + 0 + 65.
    #[test]
    fn test_salary_total_mixed_entries() {
        let entries = vec![
            entry("ts_001", "cleaning", "2026-01-05", "7.5"), // 150.00
            entry("ts_002", "delivery", "2026-01-06", "3"),   // 135.00
            entry("ts_003", "gardening", "2026-01-07", "5"),  // unconfigured: 0
            custom("ts_004", "2026-01-08", "32.5", "2"),      // 65.00
        ];

        let total = salary_total(&entries, &test_catalog(), &test_rates());
        assert_eq!(total, dec("350.0"));
    }

    #[test]
    fn test_salary_total_invariant_under_reordering() {
        let mut entries = vec![
            entry("ts_001", "cleaning", "2026-01-05", "7.5"),
            entry("ts_002", "delivery", "2026-01-06", "3"),
            custom("ts_003", "2026-01-08", "32.5", "2"),
        ];

        let catalog = test_catalog();
        let rates = test_rates();
        let forward = salary_total(&entries, &catalog, &rates);
        entries.reverse();
        let backward = salary_total(&entries, &catalog, &rates);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_salary_total_empty_is_zero() {
        assert_eq!(
            salary_total(&[], &test_catalog(), &test_rates()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_salary_by_month_splits_months() {
        let entries = vec![
            entry("ts_001", "cleaning", "2026-02-03", "2"), // Feb: 40
            entry("ts_002", "cleaning", "2026-01-15", "1"), // Jan: 20
            entry("ts_003", "cleaning", "2026-02-20", "3"), // Feb: +60
        ];

        let groups = salary_by_month(&entries, &test_catalog(), &test_rates());
        assert_eq!(
            groups,
            vec![
                (MonthKey { year: 2026, month: 2 }, dec("100")),
                (MonthKey { year: 2026, month: 1 }, dec("20")),
            ]
        );
    }

    #[test]
    fn test_salary_by_month_first_appearance_order() {
        // Descending-date input keeps descending month order.
        let entries = vec![
            entry("ts_001", "cleaning", "2026-03-01", "1"),
            entry("ts_002", "cleaning", "2026-02-01", "1"),
            entry("ts_003", "cleaning", "2026-01-01", "1"),
        ];

        let groups = salary_by_month(&entries, &test_catalog(), &test_rates());
        let months: Vec<u32> = groups.iter().map(|(key, _)| key.month).collect();
        assert_eq!(months, vec![3, 2, 1]);
    }

    #[test]
    fn test_salary_by_category_groups_custom_entries_together() {
        let entries = vec![
            entry("ts_001", "cleaning", "2026-01-05", "2"), // 40
            custom("ts_002", "2026-01-06", "10", "1"),      // 10
            entry("ts_003", "delivery", "2026-01-07", "2"), // 90
            custom("ts_004", "2026-01-08", "5", "2"),       // 10
        ];

        let groups = salary_by_category(&entries, &test_catalog(), &test_rates());
        assert_eq!(
            groups,
            vec![
                (CategoryKey::Category("cleaning".to_string()), dec("40")),
                (CategoryKey::Custom, dec("20")),
                (CategoryKey::Category("delivery".to_string()), dec("90")),
            ]
        );
    }

    #[test]
    fn test_malformed_entry_does_not_abort_aggregation() {
        let entries = vec![
            entry("ts_001", "no_such_category", "2026-01-05", "100"),
            entry("ts_002", "cleaning", "2026-01-06", "1"),
        ];

        let total = salary_total(&entries, &test_catalog(), &test_rates());
        assert_eq!(total, dec("20"));
    }
}
