//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the work
//! category catalog and rate assignments from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryCatalog, RateAssignment, RateTable, WorkCategory};

use super::types::{AssignmentsConfig, CategoriesConfig};

/// Loads and provides access to the category catalog and rate assignments.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── categories.yaml   # work-category catalog
/// └── assignments.yaml  # per-subject rate assignments
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
///
/// let category = loader.get_category("cleaning").unwrap();
/// println!("Category: {}", category.name);
///
/// // Rates for one subject; an unknown subject just gets an empty table.
/// let rates = loader.rate_table_for("staff_001");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: CategoryCatalog,
    assignments: Vec<RateAssignment>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if either file is missing
    /// - [`EngineError::ConfigParseError`] for invalid YAML
    /// - [`EngineError::DuplicateAssignment`] if two assignments exist for
    ///   the same (subject, category) pair
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let categories_path = path.join("categories.yaml");
        let categories_config = Self::load_yaml::<CategoriesConfig>(&categories_path)?;

        let assignments_path = path.join("assignments.yaml");
        let assignments_config = Self::load_yaml::<AssignmentsConfig>(&assignments_path)?;

        Self::validate_assignments(&assignments_config.assignments)?;

        Ok(Self {
            catalog: CategoryCatalog::from_categories(categories_config.categories),
            assignments: assignments_config.assignments,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Enforces at most one active assignment per (subject, category).
    fn validate_assignments(assignments: &[RateAssignment]) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for assignment in assignments {
            let key = (
                assignment.subject_id.as_str(),
                assignment.category_id.as_str(),
            );
            if !seen.insert(key) {
                return Err(EngineError::DuplicateAssignment {
                    subject_id: assignment.subject_id.clone(),
                    category_id: assignment.category_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns the work-category catalog.
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Gets a category by its id.
    ///
    /// Unlike the calculators, which degrade unknown categories to zero
    /// contributions, catalog queries report unknown ids as errors.
    pub fn get_category(&self, id: &str) -> EngineResult<&WorkCategory> {
        self.catalog
            .get(id)
            .ok_or_else(|| EngineError::CategoryNotFound { id: id.to_string() })
    }

    /// Builds the rate table for one subject.
    ///
    /// A subject with no assignments gets an empty table: every category
    /// is "not yet configured" and contributes zero to totals.
    pub fn rate_table_for(&self, subject_id: &str) -> RateTable {
        // Duplicates were rejected at load, so this cannot fail.
        RateTable::from_assignments(subject_id, &self.assignments)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    /// Writes a config directory under the target temp dir and returns it.
    fn write_config_dir(name: &str, categories: &str, assignments: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("timesheet-engine-test-{}", name));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("categories.yaml"), categories).unwrap();
        fs::write(dir.join("assignments.yaml"), assignments).unwrap();
        dir
    }

    const CATEGORIES: &str = r#"
categories:
  - id: cleaning
    name: Cleaning
    rate_model: hourly
  - id: delivery
    name: Delivery
    rate_model: fixed
"#;

    const ASSIGNMENTS: &str = r#"
assignments:
  - subject_id: staff_001
    category_id: cleaning
    hourly_rate: "20.00"
  - subject_id: staff_001
    category_id: delivery
    fixed_rate: "45.00"
  - subject_id: staff_002
    category_id: cleaning
    hourly_rate: "24.50"
"#;

    #[test]
    fn test_load_valid_config() {
        let dir = write_config_dir("valid", CATEGORIES, ASSIGNMENTS);
        let loader = ConfigLoader::load(&dir).unwrap();

        assert_eq!(loader.catalog().len(), 2);
        assert_eq!(loader.get_category("cleaning").unwrap().name, "Cleaning");
    }

    #[test]
    fn test_rate_table_for_subject() {
        let dir = write_config_dir("rate-table", CATEGORIES, ASSIGNMENTS);
        let loader = ConfigLoader::load(&dir).unwrap();

        let table = loader.rate_table_for("staff_001");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("cleaning").unwrap().hourly_rate,
            Some(Decimal::new(2000, 2))
        );

        let other = loader.rate_table_for("staff_002");
        assert_eq!(other.len(), 1);
        assert_eq!(
            other.get("cleaning").unwrap().hourly_rate,
            Some(Decimal::new(2450, 2))
        );
    }

    #[test]
    fn test_unknown_subject_gets_empty_table() {
        let dir = write_config_dir("unknown-subject", CATEGORIES, ASSIGNMENTS);
        let loader = ConfigLoader::load(&dir).unwrap();

        assert!(loader.rate_table_for("staff_999").is_empty());
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let dir = write_config_dir("unknown-category", CATEGORIES, ASSIGNMENTS);
        let loader = ConfigLoader::load(&dir).unwrap();

        match loader.get_category("gardening").unwrap_err() {
            EngineError::CategoryNotFound { id } => assert_eq!(id, "gardening"),
            other => panic!("Expected CategoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory_reports_config_not_found() {
        let result = ConfigLoader::load("/definitely/not/here");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("categories.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_reports_parse_error() {
        let dir = write_config_dir("bad-yaml", "categories: {nope", ASSIGNMENTS);
        match ConfigLoader::load(&dir).unwrap_err() {
            EngineError::ConfigParseError { path, .. } => {
                assert!(path.contains("categories.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_assignment_rejected_at_load() {
        let duplicate = r#"
assignments:
  - subject_id: staff_001
    category_id: cleaning
    hourly_rate: "20.00"
  - subject_id: staff_001
    category_id: cleaning
    hourly_rate: "22.00"
"#;
        let dir = write_config_dir("duplicate", CATEGORIES, duplicate);
        match ConfigLoader::load(&dir).unwrap_err() {
            EngineError::DuplicateAssignment {
                subject_id,
                category_id,
            } => {
                assert_eq!(subject_id, "staff_001");
                assert_eq!(category_id, "cleaning");
            }
            other => panic!("Expected DuplicateAssignment, got {:?}", other),
        }
    }
}
