//! Error types for the Tip Pool Engine.
//!
//! The pay calculation itself never fails. These errors come from the layers
//! around it: policy loading, the optional input validation pass, and the
//! payroll week snapshot lifecycle.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Tip Pool Engine.
///
/// # Example
///
/// ```
/// use tip_pool_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A loaded pay policy contained an unusable value.
    #[error("Invalid pay policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A tip total was rejected by input validation.
    #[error("Invalid tip total '{field}': {message}")]
    InvalidTips {
        /// Which tip total was rejected (e.g. "coffee_tips").
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An hours record was rejected by input validation.
    #[error("Invalid hours for employee '{employee_id}' field '{field}': {message}")]
    InvalidHours {
        /// The employee the hours record belongs to.
        employee_id: String,
        /// The hours field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An employee record was rejected by input validation.
    #[error("Invalid employee '{employee_id}' field '{field}': {message}")]
    InvalidEmployee {
        /// The employee that was rejected.
        employee_id: String,
        /// The field that was invalid.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A payroll week's date range was inconsistent.
    #[error("Invalid payroll week: end date {end} is before start date {start}")]
    InvalidWeek {
        /// The first day of the week.
        start: NaiveDate,
        /// The last day of the week.
        end: NaiveDate,
    },

    /// A finalized payroll week was asked to change.
    #[error("Payroll week '{payroll_id}' is already final")]
    PayrollFinalized {
        /// The id of the finalized payroll week.
        payroll_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
