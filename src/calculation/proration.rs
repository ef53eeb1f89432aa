//! Attendance proration.
//!
//! This module converts a month's attendance summary into the payable-days
//! fraction used to scale earnings, and values the loss-of-pay shortfall as a
//! named deduction line.

use rust_decimal::Decimal;

use crate::models::{AttendanceSummary, SalaryStructure};

/// The result of prorating a month's attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proration {
    /// The payable-days fraction, clamped to [0, 1].
    pub fraction: Decimal,
    /// The number of compensable days.
    pub payable_days: u32,
    /// The loss-of-pay amount, valued on the basic+HRA proxy and recorded
    /// as a named deduction rather than a silent earnings cut.
    pub loss_of_pay_amount: Decimal,
    /// Set when the period was malformed (zero total days); the record is
    /// flagged for manual review rather than silently generated.
    pub needs_review: bool,
}

/// Prorates a month's attendance into a payable-days fraction.
///
/// `fraction = (total_days - loss_of_pay_days) / total_days`, clamped to
/// [0, 1]. The loss-of-pay amount is valued on the full-rate basic plus HRA:
///
/// `loss_of_pay = (basic + hra) * lop_days / total_days`
///
/// The basic+HRA proxy (rather than full-earnings proration) matches the
/// payslip presentation downstream consumers expect; see DESIGN.md.
///
/// # Edge case
///
/// A period with zero total days cannot be prorated; the fraction defaults
/// to 1 and the result is flagged `needs_review` so an operator inspects the
/// record before approval.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate_attendance;
/// use payroll_engine::models::{AttendanceSummary, BasicPay, FixedAllowances, SalaryStructure};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure {
///     effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     annual_ctc: Decimal::new(1_200_000, 0),
///     basic: BasicPay::Amount(Decimal::new(50_000, 0)),
///     hra_percentage: Decimal::new(40, 2),
///     allowances: FixedAllowances::default(),
///     overtime_hourly_rate: None,
///     pf_applicable: true,
///     esi_applicable: false,
///     bank: None,
/// };
/// let attendance = AttendanceSummary {
///     total_days: 30,
///     present_days: 26,
///     paid_leave_days: 2,
///     loss_of_pay_days: 2,
///     other_leave_days: 0,
///     overtime_hours: Decimal::ZERO,
/// };
///
/// let proration = prorate_attendance(&structure, &attendance);
/// assert_eq!(proration.payable_days, 28);
/// // (50,000 + 20,000) * 2 / 30
/// assert_eq!(proration.loss_of_pay_amount, Decimal::new(4_666_67, 2));
/// ```
pub fn prorate_attendance(
    structure: &SalaryStructure,
    attendance: &AttendanceSummary,
) -> Proration {
    if attendance.total_days == 0 {
        return Proration {
            fraction: Decimal::ONE,
            payable_days: 0,
            loss_of_pay_amount: Decimal::ZERO,
            needs_review: true,
        };
    }

    let total = Decimal::from(attendance.total_days);
    let payable_days = attendance.paid_days();
    let fraction = (Decimal::from(payable_days) / total)
        .clamp(Decimal::ZERO, Decimal::ONE);

    let full_rate = structure.monthly_basic() + structure.monthly_hra();
    let loss_of_pay_amount =
        (full_rate * Decimal::from(attendance.loss_of_pay_days) / total).round_dp(2);

    Proration {
        fraction,
        payable_days,
        loss_of_pay_amount,
        needs_review: false,
    }
}
