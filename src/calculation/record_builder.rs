//! Payroll record assembly.
//!
//! This module composes proration, earnings resolution, and the statutory
//! deduction set into one immutable [`PayrollRecord`] per employee per period.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::StatutoryRates;
use crate::error::PayrollResult;
use crate::models::{
    AttendanceSnapshot, AttendanceSummary, Deductions, EmployeeProfile, PayPeriod, PayrollRecord,
    PayrollStatus, SalaryStructure,
};
use rust_decimal::Decimal;

use super::{
    calculate_esi, calculate_pf, calculate_professional_tax, calculate_tds, prorate_attendance,
    resolve_earnings,
};

/// One employee's inputs for a batch run: the read-only snapshots supplied
/// by the employee, salary, and attendance services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee snapshot.
    pub employee: EmployeeProfile,
    /// The salary structure in effect for the period.
    pub structure: SalaryStructure,
    /// The period's attendance summary.
    pub attendance: AttendanceSummary,
    /// TDS pre-computed by an external tax engine, if any. When present the
    /// slab projection is skipped and this value is trusted.
    #[serde(default)]
    pub external_tds: Option<Decimal>,
}

/// Builds a payroll record for one employee and period.
///
/// For fixed inputs and rates the resulting earnings and deductions are
/// deterministic; only the record id and generation timestamp differ
/// between runs.
///
/// The record starts in status [`PayrollStatus::Generated`] with an empty
/// approval trail and version 0. Gross earnings equal the exact sum of the
/// earnings fields, and the net salary is derived on read, never stored.
///
/// # Errors
///
/// Propagates `InvalidSalaryStructure` / `InvalidAttendance` for malformed
/// snapshots (per-employee batch failures) and `InvalidEarnings` for
/// structurally invalid monetary values.
pub fn build_record(
    input: &PayrollInput,
    period: PayPeriod,
    rates: &StatutoryRates,
) -> PayrollResult<PayrollRecord> {
    let employee_id = input.employee.id.as_str();

    input.structure.validate(employee_id)?;
    input.attendance.validate(employee_id)?;

    let proration = prorate_attendance(&input.structure, &input.attendance);
    let earnings = resolve_earnings(
        employee_id,
        &input.structure,
        proration.fraction,
        input.attendance.overtime_hours,
    )?;
    // Earnings fields are rounded individually, so the gross used for
    // deduction thresholds is their exact sum.
    let gross = earnings.total();

    let pf = calculate_pf(earnings.basic, input.structure.pf_applicable, &rates.provident_fund)?;
    let esi = calculate_esi(gross, input.structure.esi_applicable, &rates.state_insurance)?;
    let professional_tax = calculate_professional_tax(gross, &rates.professional_tax)?;
    let tds = calculate_tds(gross, &rates.income_tax, input.external_tds)?;

    let deductions = Deductions {
        pf_employee: pf.employee,
        pf_employer: pf.employer,
        esi_employee: esi.employee,
        esi_employer: esi.employer,
        professional_tax,
        tds,
        loss_of_pay: proration.loss_of_pay_amount,
    };

    Ok(PayrollRecord {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        period,
        earnings,
        deductions,
        attendance: AttendanceSnapshot {
            total_days: input.attendance.total_days,
            present_days: input.attendance.present_days,
            paid_days: proration.payable_days,
            loss_of_pay_days: input.attendance.loss_of_pay_days,
        },
        status: PayrollStatus::Generated,
        approvals: Vec::new(),
        payment: None,
        bank: input.structure.bank.clone(),
        needs_review: proration.needs_review,
        superseded_by: None,
        version: 0,
        generated_at: Utc::now(),
        submitted_at: None,
    })
}
