//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod payroll_record;
mod salary_structure;

pub use attendance::AttendanceSummary;
pub use employee::EmployeeProfile;
pub use pay_period::PayPeriod;
pub use payroll_record::{
    ApprovalDecision, ApprovalEntry, Approver, ApproverRole, AttendanceSnapshot, Deductions,
    Earnings, PaySummary, PaymentDetails, PaymentMode, PayrollRecord, PayrollStatus,
};
pub use salary_structure::{BankDetails, BasicPay, FixedAllowances, SalaryStructure};
