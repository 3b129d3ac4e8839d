//! Error types for the Severance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating a rescission
//! request, loading the statutory rule set, or computing entitlements.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Severance Engine.
///
/// Input validation failures and configuration failures share this type.
/// Use [`EngineError::is_validation`] to tell a caller fault apart from a
/// deployment fault.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::InvalidVacationDays { days: 45, max: 30 };
/// assert_eq!(
///     error.to_string(),
///     "Accrued vacation days must be between 0 and 30, got 45"
/// );
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Base salary was missing, zero or negative.
    #[error("Base salary must be greater than zero, got {value}")]
    InvalidSalary {
        /// The rejected base salary.
        value: Decimal,
    },

    /// A date was missing, or the end date precedes the start date.
    #[error("Invalid employment date range: {message}")]
    InvalidDateRange {
        /// The start date, if one was supplied.
        start: Option<NaiveDate>,
        /// The end date, if one was supplied.
        end: Option<NaiveDate>,
        /// A description of what made the range invalid.
        message: String,
    },

    /// Accrued vacation days were outside the allowed range.
    #[error("Accrued vacation days must be between 0 and {max}, got {days}")]
    InvalidVacationDays {
        /// The rejected number of days.
        days: i32,
        /// The upper bound from the rule set.
        max: u32,
    },

    /// A compensation component or the fund balance was negative or larger
    /// than the engine accepts.
    #[error("Monetary field '{field}' must be between 0 and {max}, got {value}")]
    InvalidMonetaryField {
        /// The name of the offending field.
        field: String,
        /// The rejected value.
        value: Decimal,
        /// The largest accepted amount.
        max: Decimal,
    },

    /// A termination type code was not recognised.
    #[error("Unknown termination type: {value}")]
    InvalidTerminationType {
        /// The unrecognised code.
        value: String,
    },

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

    /// A loaded rule set contained values that cannot be used.
    #[error("Invalid rule set field '{field}': {message}")]
    InvalidConfig {
        /// The offending rule set field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

impl EngineError {
    /// Returns true if the error was caused by the caller's input rather
    /// than by the engine's own configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidSalary { .. }
                | EngineError::InvalidDateRange { .. }
                | EngineError::InvalidVacationDays { .. }
                | EngineError::InvalidMonetaryField { .. }
                | EngineError::InvalidTerminationType { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
