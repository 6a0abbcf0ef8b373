//! Configuration loading for the salary engine.
//!
//! The catalog of work categories and the active rate assignments are
//! supplied to the engine as data; this module loads them from YAML files
//! and answers per-subject rate-table queries.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AssignmentsConfig, CategoriesConfig};
