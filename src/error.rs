//! Error types for the Paycheck Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pay calculation.

use thiserror::Error;

/// The main error type for the Paycheck Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paycheck_engine::error::EngineError;
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

    /// Meal-plan label was not found in the per diem table.
    #[error("Meal plan not found: {label}")]
    MealPlanNotFound {
        /// The meal-plan label that was not found.
        label: String,
    },

    /// A pay-settings field was invalid or out of range.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A week's inputs were invalid or inconsistent.
    #[error("Invalid week {index}: {message}")]
    InvalidWeek {
        /// The zero-based index of the invalid week.
        index: usize,
        /// A description of what made the week invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
