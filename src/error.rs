//! Error types for the TimeSheet salary calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that a missing or unconfigured rate is deliberately NOT an error
//! anywhere in this crate: it degrades to a zero contribution so that
//! dashboards can render before an employer finishes configuring rates.

use thiserror::Error;

/// The main error type for the salary calculation engine.
///
/// Errors are limited to configuration loading and catalog queries; the
/// calculators themselves are total functions and never fail.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Work category id was not found in the catalog.
    #[error("Work category not found: {id}")]
    CategoryNotFound {
        /// The category id that was not found.
        id: String,
    },

    /// More than one rate assignment exists for the same subject and category.
    #[error("Duplicate rate assignment for subject '{subject_id}' and category '{category_id}'")]
    DuplicateAssignment {
        /// The subject the duplicate assignments belong to.
        subject_id: String,
        /// The category with more than one active assignment.
        category_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
