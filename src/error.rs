//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll generation and
//! lifecycle management.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{PayPeriod, PayrollStatus};

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// No statutory rate table is effective for the given date.
    #[error("No statutory rate table effective on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// A pay period was malformed (month outside 1..=12).
    #[error("Invalid pay period: month {month} is out of range")]
    InvalidPeriod {
        /// The rejected month value.
        month: u32,
    },

    /// An employee's compensation data was malformed; the employee is
    /// skipped and the batch continues.
    #[error("Invalid salary structure for employee '{employee_id}': {message}")]
    InvalidSalaryStructure {
        /// The employee whose structure was rejected.
        employee_id: String,
        /// A description of what made the structure invalid.
        message: String,
    },

    /// An attendance summary violated its day-count invariant.
    #[error("Invalid attendance for employee '{employee_id}': {message}")]
    InvalidAttendance {
        /// The employee whose attendance was rejected.
        employee_id: String,
        /// A description of the inconsistency.
        message: String,
    },

    /// A monetary input was structurally invalid (negative). This is a
    /// programming defect and should never surface to an operator.
    #[error("Invalid earnings: {message}")]
    InvalidEarnings {
        /// A description of the invalid value.
        message: String,
    },

    /// A lifecycle transition was attempted that the state machine forbids.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        /// The record's current status.
        from: PayrollStatus,
        /// The requested target status.
        to: PayrollStatus,
    },

    /// A rejection was attempted without a comment.
    #[error("Rejection requires a non-empty comment")]
    MissingApprovalComment,

    /// A payment marking was attempted without payment date and mode.
    #[error("Marking a record as paid requires a payment date and mode")]
    MissingPaymentDetails,

    /// The acting approver's role is not permitted to approve payroll.
    #[error("Role '{role}' is not authorized to approve payroll")]
    UnauthorizedApprover {
        /// The rejected role.
        role: String,
    },

    /// A non-superseded record already exists for the employee and period.
    /// Batch generation treats this as a skip, not a failure.
    #[error("Payroll for employee '{employee_id}' already exists for {period}")]
    DuplicatePeriod {
        /// The employee the duplicate was detected for.
        employee_id: String,
        /// The period the duplicate was detected for.
        period: PayPeriod,
    },

    /// No record with the given id exists in the store.
    #[error("Payroll record not found: {id}")]
    RecordNotFound {
        /// The id that was not found.
        id: Uuid,
    },

    /// The record has been superseded by a correction and is frozen.
    #[error("Payroll record {id} has been superseded and is read-only")]
    RecordSuperseded {
        /// The frozen record's id.
        id: Uuid,
    },

    /// The record was modified concurrently; the caller holds a stale copy.
    #[error("Payroll record {id} was modified concurrently")]
    ConcurrentModification {
        /// The contested record's id.
        id: Uuid,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
