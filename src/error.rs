//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonthSelection {
///     employee_id: "7".to_string(),
///     month: "Mar".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Please select a valid month: no attendance for employee '7' in Mar"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No attendance tally exists for the requested employee and month.
    #[error("Please select a valid month: no attendance for employee '{employee_id}' in {month}")]
    InvalidMonthSelection {
        /// The employee the salary was requested for.
        employee_id: String,
        /// The requested month label.
        month: String,
    },

    /// A salary record with the given id does not exist.
    #[error("Salary record not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// The employee directory has no entry for the given id.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The missing employee id.
        employee_id: String,
    },

    /// A leave record refers to a leave type with no allowance configured.
    #[error("Leave type not found: {leave_type}")]
    LeaveTypeNotFound {
        /// The leave type that could not be resolved.
        leave_type: String,
    },

    /// A caller-supplied value was rejected.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
