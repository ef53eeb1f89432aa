//! State-insurance contributions.
//!
//! Contributions apply as a step function of gross earnings: an employee
//! whose gross crosses the wage ceiling stops contributing entirely rather
//! than phasing out.

use rust_decimal::Decimal;

use crate::config::EsiRules;
use crate::error::{PayrollError, PayrollResult};

/// The pair of state-insurance contributions for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EsiContribution {
    /// Withheld from the employee.
    pub employee: Decimal,
    /// Contributed by the employer (reporting only).
    pub employer: Decimal,
}

impl EsiContribution {
    /// The zero contribution, used above the ceiling or when opted out.
    pub const ZERO: EsiContribution = EsiContribution {
        employee: Decimal::ZERO,
        employer: Decimal::ZERO,
    };
}

/// Computes state-insurance contributions on the period's gross earnings.
///
/// Both contributions apply only while `gross <= wage_ceiling`. At one unit
/// above the ceiling the contribution drops to zero. This is an intentional
/// step function, not a phase-out.
///
/// # Errors
///
/// Returns `InvalidEarnings` for a negative gross.
pub fn calculate_esi(
    gross: Decimal,
    esi_applicable: bool,
    rules: &EsiRules,
) -> PayrollResult<EsiContribution> {
    if gross < Decimal::ZERO {
        return Err(PayrollError::InvalidEarnings {
            message: format!("gross earnings {} is negative", gross),
        });
    }
    if !esi_applicable || gross > rules.wage_ceiling {
        return Ok(EsiContribution::ZERO);
    }

    Ok(EsiContribution {
        employee: (gross * rules.employee_rate).round_dp(2),
        employer: (gross * rules.employer_rate).round_dp(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> EsiRules {
        EsiRules {
            wage_ceiling: dec("21000"),
            employee_rate: dec("0.0075"),
            employer_rate: dec("0.0325"),
        }
    }

    #[test]
    fn test_below_ceiling_contributes() {
        let esi = calculate_esi(dec("20000"), true, &rules()).unwrap();
        assert_eq!(esi.employee, dec("150.00"));
        assert_eq!(esi.employer, dec("650.00"));
    }

    #[test]
    fn test_one_below_ceiling_contributes() {
        let esi = calculate_esi(dec("20999"), true, &rules()).unwrap();
        assert!(esi.employee > Decimal::ZERO);
    }

    #[test]
    fn test_exactly_at_ceiling_contributes() {
        let esi = calculate_esi(dec("21000"), true, &rules()).unwrap();
        assert_eq!(esi.employee, dec("157.50"));
    }

    #[test]
    fn test_one_above_ceiling_stops_entirely() {
        let esi = calculate_esi(dec("21001"), true, &rules()).unwrap();
        assert_eq!(esi, EsiContribution::ZERO);
    }

    #[test]
    fn test_not_applicable_yields_zero() {
        let esi = calculate_esi(dec("20000"), false, &rules()).unwrap();
        assert_eq!(esi, EsiContribution::ZERO);
    }

    #[test]
    fn test_zero_gross_yields_zero_not_error() {
        let esi = calculate_esi(Decimal::ZERO, true, &rules()).unwrap();
        assert_eq!(esi.employee, Decimal::ZERO);
    }

    #[test]
    fn test_negative_gross_rejected() {
        let result = calculate_esi(dec("-0.01"), true, &rules());
        assert!(matches!(result, Err(PayrollError::InvalidEarnings { .. })));
    }
}
