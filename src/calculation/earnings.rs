//! Earnings resolution.
//!
//! This module derives the monthly earnings breakdown from an employee's
//! salary structure, scaled to the period's payable-days fraction.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Earnings, SalaryStructure};

/// Resolves a salary structure into the period's earnings breakdown.
///
/// Every monthly component is scaled by the payable-days fraction and
/// rounded to minor currency units:
///
/// - `basic = monthly_basic * fraction`
/// - `hra = basic * hra_percentage` (computed on the scaled basic)
/// - each fixed allowance is scaled by the same fraction
/// - `special_allowance` is the CTC balancing component (the part of the
///   monthly CTC not covered by basic, HRA, and fixed allowances), scaled
///   like the rest
/// - overtime is valued at the structure's hourly rate and is NOT prorated
///
/// # Errors
///
/// Returns `InvalidSalaryStructure` for non-positive CTC or basic, and
/// `InvalidEarnings` for a negative fraction or overtime input (a
/// programming defect upstream, since proration clamps its output).
pub fn resolve_earnings(
    employee_id: &str,
    structure: &SalaryStructure,
    fraction: Decimal,
    overtime_hours: Decimal,
) -> PayrollResult<Earnings> {
    structure.validate(employee_id)?;

    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(PayrollError::InvalidEarnings {
            message: format!("payable-days fraction {} is outside [0, 1]", fraction),
        });
    }
    if overtime_hours < Decimal::ZERO {
        return Err(PayrollError::InvalidEarnings {
            message: format!("overtime hours {} is negative", overtime_hours),
        });
    }

    let full_basic = structure.monthly_basic();
    let full_hra = structure.monthly_hra();
    let monthly_ctc = (structure.annual_ctc / Decimal::from(12)).round_dp(2);

    let basic = (full_basic * fraction).round_dp(2);
    let hra = (basic * structure.hra_percentage).round_dp(2);

    // The CTC balancing head at full rate, floored at zero for structures
    // whose named components already exhaust the CTC.
    let full_special = (monthly_ctc - full_basic - full_hra - structure.allowances.total())
        .max(Decimal::ZERO);
    let special_allowance = (full_special * fraction).round_dp(2);

    let allowances = &structure.allowances;
    let overtime = match structure.overtime_hourly_rate {
        Some(rate) => (overtime_hours * rate).round_dp(2),
        None => Decimal::ZERO,
    };

    Ok(Earnings {
        basic,
        hra,
        special_allowance,
        conveyance: (allowances.conveyance * fraction).round_dp(2),
        medical: (allowances.medical * fraction).round_dp(2),
        education: (allowances.education * fraction).round_dp(2),
        lta: (allowances.lta * fraction).round_dp(2),
        other: (allowances.other * fraction).round_dp(2),
        overtime,
    })
}
