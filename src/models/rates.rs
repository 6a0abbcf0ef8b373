//! Rate assignments and the per-subject rate table.
//!
//! Rates live in explicit `Option`s: `None` means "not yet configured" and
//! is distinct from a configured rate of 0.00, even though both contribute
//! zero to any total.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A rate assignment row: one subject, one category, one rate value
/// interpreted according to the category's rate model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAssignment {
    /// The subject this rate applies to.
    pub subject_id: String,
    /// The category this rate applies to.
    pub category_id: String,
    /// Monetary amount per hour, for hourly categories.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Monetary amount per job, for fixed categories.
    #[serde(default)]
    pub fixed_rate: Option<Decimal>,
}

/// The rate values configured for one category, for one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRates {
    /// Monetary amount per hour, if configured.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Monetary amount per job, if configured.
    #[serde(default)]
    pub fixed_rate: Option<Decimal>,
}

/// A single subject's rates, keyed by category id.
///
/// Built by joining that subject's [`RateAssignment`] rows. The invariant
/// "at most one active rate per (subject, category) pair" is enforced at
/// construction.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{RateAssignment, RateTable};
/// use rust_decimal::Decimal;
///
/// let assignments = vec![RateAssignment {
///     subject_id: "staff_001".to_string(),
///     category_id: "cleaning".to_string(),
///     hourly_rate: Some(Decimal::new(2000, 2)),
///     fixed_rate: None,
/// }];
/// let table = RateTable::from_assignments("staff_001", &assignments).unwrap();
/// assert!(table.get("cleaning").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, CategoryRates>,
}

impl RateTable {
    /// Creates an empty rate table (no categories configured).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rate table for one subject from assignment rows.
    ///
    /// Rows belonging to other subjects are ignored. Two rows for the same
    /// (subject, category) pair violate the single-active-rate invariant
    /// and produce [`EngineError::DuplicateAssignment`].
    pub fn from_assignments(
        subject_id: &str,
        assignments: &[RateAssignment],
    ) -> EngineResult<Self> {
        let mut rates = HashMap::new();
        for assignment in assignments
            .iter()
            .filter(|a| a.subject_id == subject_id)
        {
            let previous = rates.insert(
                assignment.category_id.clone(),
                CategoryRates {
                    hourly_rate: assignment.hourly_rate,
                    fixed_rate: assignment.fixed_rate,
                },
            );
            if previous.is_some() {
                return Err(EngineError::DuplicateAssignment {
                    subject_id: subject_id.to_string(),
                    category_id: assignment.category_id.clone(),
                });
            }
        }
        Ok(Self { rates })
    }

    /// Inserts or replaces the rates for a category.
    pub fn insert(&mut self, category_id: impl Into<String>, rates: CategoryRates) {
        self.rates.insert(category_id.into(), rates);
    }

    /// Looks up the rates configured for a category.
    pub fn get(&self, category_id: &str) -> Option<&CategoryRates> {
        self.rates.get(category_id)
    }

    /// Returns the number of categories with configured rates.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates are configured.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
