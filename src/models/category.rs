//! Work category model and related types.
//!
//! A work category is an assignable type of work (cleaning, delivery, ...)
//! billed either per hour or per completed unit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a work category's quantity and rate combine into a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateModel {
    /// Billed per hour worked; the entry quantity is a number of hours.
    Hourly,
    /// Billed per completed job; the entry quantity is a job count.
    Fixed,
}

/// An assignable type of work.
///
/// Categories can be renamed freely, but changing the rate model of a
/// category with existing entries changes what those entries' quantities
/// mean; callers recompute totals from current inputs on every call, so
/// there is no stale-total hazard inside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCategory {
    /// Unique identifier for the category.
    pub id: String,
    /// Display name (e.g., "Cleaning").
    pub name: String,
    /// Whether the category is billed hourly or per fixed unit.
    pub rate_model: RateModel,
}

/// Lookup table from category id to [`WorkCategory`].
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{CategoryCatalog, RateModel, WorkCategory};
///
/// let catalog = CategoryCatalog::from_categories(vec![WorkCategory {
///     id: "cleaning".to_string(),
///     name: "Cleaning".to_string(),
///     rate_model: RateModel::Hourly,
/// }]);
/// assert!(catalog.get("cleaning").is_some());
/// assert!(catalog.get("unknown").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCatalog {
    categories: HashMap<String, WorkCategory>,
}

impl CategoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of categories.
    ///
    /// Later entries with the same id replace earlier ones.
    pub fn from_categories(categories: Vec<WorkCategory>) -> Self {
        let categories = categories.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self { categories }
    }

    /// Looks up a category by id.
    pub fn get(&self, id: &str) -> Option<&WorkCategory> {
        self.categories.get(id)
    }

    /// Returns the number of categories in the catalog.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the catalog contains no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over all categories in the catalog.
    pub fn iter(&self) -> impl Iterator<Item = &WorkCategory> {
        self.categories.values()
    }
}
