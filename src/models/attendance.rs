//! Attendance summary model.
//!
//! The attendance service supplies one [`AttendanceSummary`] per employee per
//! period. The engine consumes it as a read-only snapshot; the day counts it
//! carries are frozen onto the generated payroll record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A month's attendance for one employee.
///
/// Invariant: `present_days + paid_leave_days + loss_of_pay_days +
/// other_leave_days == total_days`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceSummary;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceSummary {
///     total_days: 30,
///     present_days: 26,
///     paid_leave_days: 2,
///     loss_of_pay_days: 2,
///     other_leave_days: 0,
///     overtime_hours: Decimal::ZERO,
/// };
/// assert!(attendance.validate("emp_001").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Total days in the payroll period.
    pub total_days: u32,
    /// Days the employee was present.
    pub present_days: u32,
    /// Approved paid-leave days.
    pub paid_leave_days: u32,
    /// Loss-of-pay (unpaid leave) days.
    pub loss_of_pay_days: u32,
    /// Other leave days (e.g. compensatory off) that remain paid.
    #[serde(default)]
    pub other_leave_days: u32,
    /// Overtime hours worked in the period.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl AttendanceSummary {
    /// Returns the number of compensable days in the period.
    pub fn paid_days(&self) -> u32 {
        self.total_days.saturating_sub(self.loss_of_pay_days)
    }

    /// Validates the day-count invariant.
    ///
    /// A violation is a per-employee batch failure, not a panic; the
    /// remaining employees in the batch are unaffected.
    pub fn validate(&self, employee_id: &str) -> PayrollResult<()> {
        let accounted = self.present_days
            + self.paid_leave_days
            + self.loss_of_pay_days
            + self.other_leave_days;
        if accounted != self.total_days {
            return Err(PayrollError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                message: format!(
                    "day counts sum to {} but the period has {} days",
                    accounted, self.total_days
                ),
            });
        }
        if self.overtime_hours < Decimal::ZERO {
            return Err(PayrollError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                message: "overtime hours must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_month() -> AttendanceSummary {
        AttendanceSummary {
            total_days: 30,
            present_days: 30,
            paid_leave_days: 0,
            loss_of_pay_days: 0,
            other_leave_days: 0,
            overtime_hours: Decimal::ZERO,
        }
    }

    #[test]
    fn test_validate_accepts_balanced_counts() {
        assert!(full_month().validate("emp_001").is_ok());
    }

    #[test]
    fn test_validate_rejects_unbalanced_counts() {
        let mut attendance = full_month();
        attendance.present_days = 28;

        match attendance.validate("emp_001") {
            Err(PayrollError::InvalidAttendance { employee_id, message }) => {
                assert_eq!(employee_id, "emp_001");
                assert!(message.contains("28"));
            }
            other => panic!("Expected InvalidAttendance, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_overtime() {
        let mut attendance = full_month();
        attendance.overtime_hours = Decimal::NEGATIVE_ONE;
        assert!(attendance.validate("emp_001").is_err());
    }

    #[test]
    fn test_paid_days_subtracts_lop() {
        let mut attendance = full_month();
        attendance.present_days = 26;
        attendance.paid_leave_days = 2;
        attendance.loss_of_pay_days = 2;
        assert_eq!(attendance.paid_days(), 28);
    }

    #[test]
    fn test_paid_days_saturates_on_malformed_input() {
        let attendance = AttendanceSummary {
            total_days: 0,
            present_days: 0,
            paid_leave_days: 0,
            loss_of_pay_days: 3,
            other_leave_days: 0,
            overtime_hours: Decimal::ZERO,
        };
        assert_eq!(attendance.paid_days(), 0);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let json = r#"{
            "total_days": 30,
            "present_days": 30,
            "paid_leave_days": 0,
            "loss_of_pay_days": 0
        }"#;

        let attendance: AttendanceSummary = serde_json::from_str(json).unwrap();
        assert_eq!(attendance.other_leave_days, 0);
        assert_eq!(attendance.overtime_hours, Decimal::ZERO);
    }
}
