//! Work-log entry model.
//!
//! An entry records a quantity of work (hours or job count) performed by a
//! subject on a given date, either against a catalogued work category or as
//! custom-rated miscellaneous work carrying its own per-unit rate.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an entry's rate is resolved.
///
/// The custom-rated variant replaces the legacy "Other" sentinel category:
/// instead of comparing category names, the rate override is part of the
/// entry's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryKind {
    /// Work against a catalogued category; the rate comes from the
    /// subject's rate assignment for that category.
    Standard {
        /// The work category this entry is logged against.
        category_id: String,
    },
    /// Miscellaneous work with a free-text description and a per-unit rate
    /// that supersedes any assigned rate entirely.
    CustomRated {
        /// What the work was.
        description: String,
        /// The per-unit rate to multiply the quantity by.
        rate: Decimal,
    },
}

/// A single logged unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The subject (staff member) who performed the work.
    pub subject_id: String,
    /// The date the work was performed.
    pub work_date: NaiveDate,
    /// Hours worked for hourly categories, job count for fixed categories.
    pub quantity: Decimal,
    /// Optional start time of day.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Optional end time of day.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Standard (category-rated) or custom-rated work.
    pub kind: EntryKind,
}

impl WorkLogEntry {
    /// Returns the category id for standard entries, `None` for
    /// custom-rated ones.
    pub fn category_id(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Standard { category_id } => Some(category_id),
            EntryKind::CustomRated { .. } => None,
        }
    }

    /// Returns true if this entry carries its own rate.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::{EntryKind, WorkLogEntry};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = WorkLogEntry {
    ///     id: "ts_001".to_string(),
    ///     subject_id: "staff_001".to_string(),
    ///     work_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     quantity: Decimal::new(20, 1), // 2.0
    ///     start_time: None,
    ///     end_time: None,
    ///     kind: EntryKind::CustomRated {
    ///         description: "Window repair".to_string(),
    ///         rate: Decimal::new(325, 1), // 32.5
    ///     },
    /// };
    /// assert!(entry.is_custom_rated());
    /// ```
    pub fn is_custom_rated(&self) -> bool {
        matches!(self.kind, EntryKind::CustomRated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn standard_entry(id: &str, category_id: &str) -> WorkLogEntry {
        WorkLogEntry {
            id: id.to_string(),
            subject_id: "staff_001".to_string(),
            work_date: make_date("2026-01-15"),
            quantity: Decimal::new(75, 1), // 7.5
            start_time: None,
            end_time: None,
            kind: EntryKind::Standard {
                category_id: category_id.to_string(),
            },
        }
    }

    #[test]
    fn test_category_id_for_standard_entry() {
        let entry = standard_entry("ts_001", "cleaning");
        assert_eq!(entry.category_id(), Some("cleaning"));
        assert!(!entry.is_custom_rated());
    }

    #[test]
    fn test_category_id_for_custom_rated_entry() {
        let entry = WorkLogEntry {
            kind: EntryKind::CustomRated {
                description: "Window repair".to_string(),
                rate: Decimal::new(325, 1),
            },
            ..standard_entry("ts_002", "ignored")
        };
        assert_eq!(entry.category_id(), None);
        assert!(entry.is_custom_rated());
    }

    #[test]
    fn test_standard_entry_deserialization() {
        let json = r#"{
            "id": "ts_001",
            "subject_id": "staff_001",
            "work_date": "2026-01-15",
            "quantity": "7.5",
            "start_time": "09:00:00",
            "end_time": "16:30:00",
            "kind": { "type": "standard", "category_id": "cleaning" }
        }"#;

        let entry: WorkLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.quantity, Decimal::new(75, 1));
        assert_eq!(entry.category_id(), Some("cleaning"));
        assert_eq!(
            entry.start_time,
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_custom_rated_entry_deserialization() {
        let json = r#"{
            "id": "ts_002",
            "subject_id": "staff_001",
            "work_date": "2026-01-16",
            "quantity": "2",
            "kind": {
                "type": "custom_rated",
                "description": "Window repair",
                "rate": "32.50"
            }
        }"#;

        let entry: WorkLogEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_custom_rated());
        assert_eq!(entry.start_time, None);
        assert_eq!(entry.end_time, None);
        match entry.kind {
            EntryKind::CustomRated { description, rate } => {
                assert_eq!(description, "Window repair");
                assert_eq!(rate, Decimal::new(3250, 2));
            }
            other => panic!("Expected CustomRated, got {:?}", other),
        }
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let entry = WorkLogEntry {
            start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            end_time: Some(NaiveTime::from_hms_opt(16, 30, 0).unwrap()),
            ..standard_entry("ts_003", "delivery")
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: WorkLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
