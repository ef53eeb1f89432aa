//! Provident-fund contributions.
//!
//! Employee and employer contributions are computed on basic salary clamped
//! to the configured wage ceiling.

use rust_decimal::Decimal;

use crate::config::PfRules;
use crate::error::{PayrollError, PayrollResult};

/// The pair of provident-fund contributions for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PfContribution {
    /// Withheld from the employee.
    pub employee: Decimal,
    /// Contributed by the employer (reporting only).
    pub employer: Decimal,
}

impl PfContribution {
    /// The zero contribution, used when PF does not apply.
    pub const ZERO: PfContribution = PfContribution {
        employee: Decimal::ZERO,
        employer: Decimal::ZERO,
    };
}

/// Computes provident-fund contributions on the period's basic salary.
///
/// `contribution = min(basic, wage_ceiling) * rate`, rounded to minor
/// currency units, for the employee and employer rates independently.
/// Returns zero contributions when the structure opted out of PF.
///
/// # Errors
///
/// Returns `InvalidEarnings` for a negative basic; absent pay (zero basic)
/// yields zero contributions rather than an error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pf;
/// use payroll_engine::config::PfRules;
/// use rust_decimal::Decimal;
///
/// let rules = PfRules {
///     wage_ceiling: Decimal::new(15_000, 0),
///     employee_rate: Decimal::new(12, 2),
///     employer_rate: Decimal::new(12, 2),
/// };
///
/// // Basic far above the ceiling: contribution is computed on the ceiling.
/// let pf = calculate_pf(Decimal::new(100_000, 0), true, &rules).unwrap();
/// assert_eq!(pf.employee, Decimal::new(1_800_00, 2));
/// ```
pub fn calculate_pf(
    basic: Decimal,
    pf_applicable: bool,
    rules: &PfRules,
) -> PayrollResult<PfContribution> {
    if basic < Decimal::ZERO {
        return Err(PayrollError::InvalidEarnings {
            message: format!("basic salary {} is negative", basic),
        });
    }
    if !pf_applicable {
        return Ok(PfContribution::ZERO);
    }

    let wage_base = basic.min(rules.wage_ceiling);
    Ok(PfContribution {
        employee: (wage_base * rules.employee_rate).round_dp(2),
        employer: (wage_base * rules.employer_rate).round_dp(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> PfRules {
        PfRules {
            wage_ceiling: dec("15000"),
            employee_rate: dec("0.12"),
            employer_rate: dec("0.12"),
        }
    }

    #[test]
    fn test_ceiling_applied_to_high_basic() {
        let pf = calculate_pf(dec("100000"), true, &rules()).unwrap();
        assert_eq!(pf.employee, dec("1800.00"));
        assert_eq!(pf.employer, dec("1800.00"));
    }

    #[test]
    fn test_basic_below_ceiling_used_directly() {
        let pf = calculate_pf(dec("10000"), true, &rules()).unwrap();
        assert_eq!(pf.employee, dec("1200.00"));
    }

    #[test]
    fn test_basic_exactly_at_ceiling() {
        let pf = calculate_pf(dec("15000"), true, &rules()).unwrap();
        assert_eq!(pf.employee, dec("1800.00"));
    }

    #[test]
    fn test_not_applicable_yields_zero() {
        let pf = calculate_pf(dec("100000"), false, &rules()).unwrap();
        assert_eq!(pf, PfContribution::ZERO);
    }

    #[test]
    fn test_zero_basic_yields_zero_not_error() {
        let pf = calculate_pf(Decimal::ZERO, true, &rules()).unwrap();
        assert_eq!(pf.employee, Decimal::ZERO);
    }

    #[test]
    fn test_negative_basic_rejected() {
        let result = calculate_pf(dec("-1"), true, &rules());
        assert!(matches!(result, Err(PayrollError::InvalidEarnings { .. })));
    }

    #[test]
    fn test_asymmetric_rates() {
        let asymmetric = PfRules {
            wage_ceiling: dec("15000"),
            employee_rate: dec("0.12"),
            employer_rate: dec("0.0367"),
        };
        let pf = calculate_pf(dec("15000"), true, &asymmetric).unwrap();
        assert_eq!(pf.employee, dec("1800.00"));
        assert_eq!(pf.employer, dec("550.50"));
    }
}
