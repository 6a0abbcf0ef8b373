//! Configuration file structures.
//!
//! These are the shapes deserialized from the YAML files in a
//! configuration directory; the loader turns them into the domain-level
//! [`CategoryCatalog`](crate::models::CategoryCatalog) and per-subject
//! rate tables.

use serde::Deserialize;

use crate::models::{RateAssignment, WorkCategory};

/// `categories.yaml`: the work-category catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// All assignable work categories.
    pub categories: Vec<WorkCategory>,
}

/// `assignments.yaml`: per-subject rate assignments.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentsConfig {
    /// All active rate assignments.
    pub assignments: Vec<RateAssignment>,
}
